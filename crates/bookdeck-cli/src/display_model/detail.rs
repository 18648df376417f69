use bookdeck_types::{Book, Catalog};
use serde::Serialize;

/// Detail view content for one selected book
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    pub id: String,
    pub title: String,
    /// "Author (Year)"
    pub subtitle: String,
    pub genres: Vec<String>,
    pub description: String,
    pub image: String,
}

impl BookDetail {
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        let author = catalog
            .author_name(&book.author)
            .unwrap_or("Unknown author");

        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author, book.published_year()),
            genres: book
                .genres
                .iter()
                .map(|genre| {
                    catalog
                        .genre_name(genre)
                        .unwrap_or("Unknown genre")
                        .to_string()
                })
                .collect(),
            description: book.description.clone(),
            image: book.cover_image().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookdeck_testing::small_catalog;
    use bookdeck_types::BookId;

    #[test]
    fn subtitle_is_author_and_year() {
        let catalog = small_catalog();
        let book = catalog.book(&BookId::new("c")).unwrap();

        let detail = BookDetail::from_book(book, &catalog);
        assert_eq!(detail.subtitle, "Second Author (1990)");
        assert_eq!(detail.genres, vec!["Fantasy"]);
    }
}
