use anyhow::{Result, bail};
use bookdeck_types::{BookId, Catalog};

use crate::args::OutputFormat;
use crate::display_model::BookDetail;
use crate::views;

pub fn handle(catalog: Catalog, id: &str, format: OutputFormat) -> Result<()> {
    let id = BookId::new(id);
    let Some(book) = catalog.book(&id) else {
        bail!("no book with id '{}' in the catalog", id);
    };

    let detail = BookDetail::from_book(book, &catalog);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
        OutputFormat::Plain => views::detail::print_detail(&detail),
    }

    Ok(())
}
