use bookdeck_engine::Browser;
use bookdeck_types::{Book, Catalog};
use serde::Serialize;

/// List tile for one book: title plus resolved author display name
#[derive(Debug, Clone, Serialize)]
pub struct BookPreview {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
}

impl BookPreview {
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: catalog
                .author_name(&book.author)
                .unwrap_or("Unknown author")
                .to_string(),
            image: book.image.clone(),
        }
    }
}

/// One rendered page of the browse list
#[derive(Debug, Clone, Serialize)]
pub struct PageDisplay {
    pub previews: Vec<BookPreview>,
    pub shown: usize,
    pub total: usize,
    pub remaining: usize,
}

impl PageDisplay {
    pub fn from_browser(browser: &Browser) -> Self {
        let previews: Vec<BookPreview> = browser
            .visible()
            .iter()
            .map(|book| BookPreview::from_book(book, browser.catalog()))
            .collect();
        let shown = previews.len();

        Self {
            previews,
            shown,
            total: browser.match_count(),
            remaining: browser.remaining_count(),
        }
    }

    /// The list-button text: how many more books a further page would reveal
    pub fn more_label(&self) -> String {
        if self.remaining > 0 {
            format!("Show more ({})", self.remaining)
        } else {
            "No more books".to_string()
        }
    }
}
