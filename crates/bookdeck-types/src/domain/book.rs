use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier of a book record (unique within a catalog)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Foreign key into the author table
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Foreign key into the genre table
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(String);

impl GenreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One immutable book record of a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: AuthorId,
    pub genres: Vec<GenreId>,

    /// Preview image reference (opaque URI)
    pub image: String,

    /// Cover art reference; preview image doubles as cover when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,

    pub description: String,

    #[serde(deserialize_with = "deserialize_published")]
    pub published: NaiveDate,
}

impl Book {
    pub fn cover_image(&self) -> &str {
        self.cover.as_deref().unwrap_or(&self.image)
    }

    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}

/// Accepts either a plain calendar date (`1979-10-12`) or an RFC 3339
/// timestamp (`1979-10-12T00:00:00.000Z`); only the date part is kept.
fn deserialize_published<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_published(&raw).map_err(serde::de::Error::custom)
}

pub(crate) fn parse_published(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| format!("invalid published date: {}", raw))
}
