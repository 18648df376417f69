use std::fmt;

use crate::domain::{AuthorId, BookId, GenreId};

/// Result type for bookdeck-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the catalog boundary
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),
    /// Catalog document failed to parse
    Parse(serde_json::Error),
    /// A book references an author missing from the author table
    UnknownAuthor { book: BookId, author: AuthorId },
    /// A book references a genre missing from the genre table
    UnknownGenre { book: BookId, genre: GenreId },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse(err) => write!(f, "parse error: {}", err),
            Error::UnknownAuthor { book, author } => {
                write!(f, "book '{}' references unknown author '{}'", book, author)
            }
            Error::UnknownGenre { book, genre } => {
                write!(f, "book '{}' references unknown genre '{}'", book, genre)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::UnknownAuthor { .. } | Error::UnknownGenre { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}
