//! Catalog fixtures shared across crate tests.
//!
//! Provides:
//! - In-code catalog builders with known shapes
//! - A JSON writer for tests that exercise the on-disk contract

use anyhow::Result;
use bookdeck_types::{AuthorId, Book, BookId, Catalog, CatalogFile, GenreId};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Build one book record with placeholder image and description
pub fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        author: AuthorId::new(author),
        genres: genres.iter().map(|g| GenreId::new(*g)).collect(),
        image: format!("https://covers.invalid/{}.jpg", id),
        cover: None,
        description: format!("Description of {}.", title),
        published: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
    }
}

/// Three-book document: A(g1, a1), B(g2, a1), C(g1, a2)
pub fn small_catalog_file() -> CatalogFile {
    CatalogFile {
        books: vec![
            book("a", "Book A", "a1", &["g1"]),
            book("b", "Book B", "a1", &["g2"]),
            book("c", "Book C", "a2", &["g1"]),
        ],
        authors: BTreeMap::from([
            (AuthorId::new("a1"), "First Author".to_string()),
            (AuthorId::new("a2"), "Second Author".to_string()),
        ]),
        genres: BTreeMap::from([
            (GenreId::new("g1"), "Fantasy".to_string()),
            (GenreId::new("g2"), "Science Fiction".to_string()),
        ]),
    }
}

/// Validated form of [`small_catalog_file`]
pub fn small_catalog() -> Catalog {
    small_catalog_file()
        .try_into()
        .expect("small catalog fixture is valid")
}

/// `n` books (`b00`, `b01`, ...) by one author in one genre, for
/// pagination walks
pub fn numbered_catalog(n: usize) -> Catalog {
    let books = (0..n)
        .map(|i| {
            book(
                &format!("b{:02}", i),
                &format!("Book {:02}", i),
                "a1",
                &["g1"],
            )
        })
        .collect();

    Catalog::from_parts(
        books,
        BTreeMap::from([(AuthorId::new("a1"), "Serial Author".to_string())]),
        BTreeMap::from([(GenreId::new("g1"), "Fantasy".to_string())]),
    )
    .expect("numbered catalog fixture is valid")
}

/// Write a catalog document to `path` in the on-disk JSON format
pub fn write_catalog_json(path: &Path, file: &CatalogFile) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(file)?)?;
    Ok(())
}
