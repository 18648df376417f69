use serde::{Deserialize, Serialize};

use super::book::{AuthorId, GenreId};

/// Author clause of a filter: everything, or exactly one author.
///
/// A closed enum instead of the `"any"` sentinel string, so a mistyped
/// selector is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthorSelect {
    #[default]
    Any,
    Id(AuthorId),
}

impl AuthorSelect {
    pub fn admits(&self, author: &AuthorId) -> bool {
        match self {
            AuthorSelect::Any => true,
            AuthorSelect::Id(id) => id == author,
        }
    }
}

/// Genre clause of a filter: everything, or membership of one genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenreSelect {
    #[default]
    Any,
    Id(GenreId),
}

impl GenreSelect {
    pub fn admits(&self, genres: &[GenreId]) -> bool {
        match self {
            GenreSelect::Any => true,
            GenreSelect::Id(id) => genres.contains(id),
        }
    }
}

/// Filter specification as the render layer submits it: free-text title
/// (blank means unconstrained) plus the two select clauses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BookFilter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: AuthorSelect,
    #[serde(default)]
    pub genre: GenreSelect,
}

impl BookFilter {
    /// The filter that matches the whole catalog
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.title.trim().is_empty()
            && self.author == AuthorSelect::Any
            && self.genre == GenreSelect::Any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_unconstrained() {
        assert!(BookFilter::all().is_unconstrained());
    }

    #[test]
    fn whitespace_title_is_unconstrained() {
        let filter = BookFilter {
            title: "   ".to_string(),
            ..BookFilter::all()
        };
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn select_clauses_admit() {
        let a1 = AuthorId::new("a1");
        assert!(AuthorSelect::Any.admits(&a1));
        assert!(AuthorSelect::Id(AuthorId::new("a1")).admits(&a1));
        assert!(!AuthorSelect::Id(AuthorId::new("a2")).admits(&a1));

        let genres = vec![GenreId::new("g1"), GenreId::new("g2")];
        assert!(GenreSelect::Any.admits(&genres));
        assert!(GenreSelect::Id(GenreId::new("g2")).admits(&genres));
        assert!(!GenreSelect::Id(GenreId::new("g3")).admits(&genres));
    }
}
