use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;

pub fn handle(config_path: &Path, existing: &Config, catalog: Option<PathBuf>) -> Result<()> {
    let mut config = existing.clone();
    if let Some(path) = catalog {
        config.catalog = Some(path);
    }

    config.save_to(config_path)?;
    println!("Wrote {}", config_path.display());

    match &config.catalog {
        Some(path) => println!("Catalog: {}", path.display()),
        None => println!(
            "No catalog recorded yet; set one with 'bookdeck init --catalog <FILE>'."
        ),
    }

    Ok(())
}
