use anyhow::Result;
use bookdeck_types::Catalog;

use crate::args::OutputFormat;
use crate::display_model::{author_rows, genre_rows};
use crate::views;

pub fn handle_authors(catalog: Catalog, format: OutputFormat) -> Result<()> {
    let rows = author_rows(&catalog);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Plain => views::lookup::print_options("author", &rows),
    }
    Ok(())
}

pub fn handle_genres(catalog: Catalog, format: OutputFormat) -> Result<()> {
    let rows = genre_rows(&catalog);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Plain => views::lookup::print_options("genre", &rows),
    }
    Ok(())
}
