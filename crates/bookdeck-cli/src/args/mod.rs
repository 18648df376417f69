mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookdeck")]
#[command(about = "Browse, filter, and page through a book catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace data directory holding config.toml
    /// (default: BOOKDECK_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Catalog JSON file (overrides BOOKDECK_CATALOG and the config)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Theme override for this invocation
    #[arg(long, global = true)]
    pub theme: Option<ThemeArg>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
