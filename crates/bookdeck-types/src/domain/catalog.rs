use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::book::{AuthorId, Book, BookId, GenreId};
use crate::error::{Error, Result};

/// On-disk catalog document: book records plus the two id -> display-name
/// tables. Convert into [`Catalog`] to validate the references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub books: Vec<Book>,
    pub authors: BTreeMap<AuthorId, String>,
    pub genres: BTreeMap<GenreId, String>,
}

/// Validated, immutable catalog. Every author/genre id referenced by a book
/// resolves in the corresponding table.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: BTreeMap<AuthorId, String>,
    genres: BTreeMap<GenreId, String>,
}

impl Catalog {
    pub fn from_parts(
        books: Vec<Book>,
        authors: BTreeMap<AuthorId, String>,
        genres: BTreeMap<GenreId, String>,
    ) -> Result<Self> {
        for book in &books {
            if !authors.contains_key(&book.author) {
                return Err(Error::UnknownAuthor {
                    book: book.id.clone(),
                    author: book.author.clone(),
                });
            }
            if let Some(genre) = book.genres.iter().find(|g| !genres.contains_key(*g)) {
                return Err(Error::UnknownGenre {
                    book: book.id.clone(),
                    genre: genre.clone(),
                });
            }
        }

        Ok(Self {
            books,
            authors,
            genres,
        })
    }

    /// All records, in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn book(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|b| &b.id == id)
    }

    pub fn author_name(&self, id: &AuthorId) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    pub fn genre_name(&self, id: &GenreId) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    /// Author table entries sorted by display name, for select-style UIs
    pub fn author_options(&self) -> Vec<(&AuthorId, &str)> {
        let mut options: Vec<_> = self
            .authors
            .iter()
            .map(|(id, name)| (id, name.as_str()))
            .collect();
        options.sort_by_key(|(_, name)| name.to_lowercase());
        options
    }

    /// Genre table entries sorted by display name
    pub fn genre_options(&self) -> Vec<(&GenreId, &str)> {
        let mut options: Vec<_> = self
            .genres
            .iter()
            .map(|(id, name)| (id, name.as_str()))
            .collect();
        options.sort_by_key(|(_, name)| name.to_lowercase());
        options
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = Error;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Self::from_parts(file.books, file.authors, file.genres)
    }
}

impl From<Catalog> for CatalogFile {
    fn from(catalog: Catalog) -> Self {
        Self {
            books: catalog.books,
            authors: catalog.authors,
            genres: catalog.genres,
        }
    }
}
