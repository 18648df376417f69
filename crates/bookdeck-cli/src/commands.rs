use anyhow::Result;
use bookdeck_types::Theme;

use crate::args::{Cli, Commands};
use crate::catalog;
use crate::config::{Config, resolve_workspace_path};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let config_path = data_dir.join("config.toml");
    let config = Config::load_from(&config_path)?;

    let theme: Theme = cli.theme.map(Theme::from).unwrap_or(config.theme);
    let command = cli.command.unwrap_or(Commands::Browse);

    match command {
        Commands::Init => handlers::init::handle(&config_path, &config, cli.catalog),

        Commands::Browse => {
            let catalog = catalog::load(cli.catalog.as_deref(), &config)?;
            handlers::browse::handle(catalog, config.page_size, theme)
        }

        Commands::List {
            title,
            author,
            genre,
            page,
            page_size,
        } => {
            let catalog = catalog::load(cli.catalog.as_deref(), &config)?;
            handlers::list::handle(
                catalog,
                handlers::list::ListArgs {
                    title,
                    author,
                    genre,
                    page,
                    page_size: page_size.unwrap_or(config.page_size),
                },
                cli.format,
            )
        }

        Commands::Show { id } => {
            let catalog = catalog::load(cli.catalog.as_deref(), &config)?;
            handlers::show::handle(catalog, &id, cli.format)
        }

        Commands::Authors => {
            let catalog = catalog::load(cli.catalog.as_deref(), &config)?;
            handlers::lookup::handle_authors(catalog, cli.format)
        }

        Commands::Genres => {
            let catalog = catalog::load(cli.catalog.as_deref(), &config)?;
            handlers::lookup::handle_genres(catalog, cli.format)
        }
    }
}
