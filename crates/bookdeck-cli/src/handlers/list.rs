use anyhow::Result;
use bookdeck_engine::Browser;
use bookdeck_types::{AuthorId, AuthorSelect, BookFilter, Catalog, GenreId, GenreSelect};

use crate::args::OutputFormat;
use crate::display_model::PageDisplay;
use crate::views;

pub struct ListArgs {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

pub fn handle(catalog: Catalog, args: ListArgs, format: OutputFormat) -> Result<()> {
    let filter = BookFilter {
        title: args.title.unwrap_or_default(),
        author: args
            .author
            .map(|id| AuthorSelect::Id(AuthorId::new(id)))
            .unwrap_or_default(),
        genre: args
            .genre
            .map(|id| GenreSelect::Id(GenreId::new(id)))
            .unwrap_or_default(),
    };

    let mut browser = Browser::new(catalog, args.page_size);
    browser.apply_filter(filter);
    for _ in 1..args.page.max(1) {
        browser.advance_page();
    }

    let page = PageDisplay::from_browser(&browser);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
        OutputFormat::Plain => views::list::print_page(&page),
    }

    Ok(())
}
