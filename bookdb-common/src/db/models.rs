//! Database models

use serde::Deserialize;

/// One row of the `authors` table.
///
/// Also the record shape of the authors CSV source, so the field names double
/// as the required header names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, sqlx::FromRow)]
pub struct Author {
    pub author_id: String,
    pub first: String,
    pub last: String,
}

impl Author {
    pub fn new(author_id: impl Into<String>, first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
            first: first.into(),
            last: last.into(),
        }
    }
}

/// One row of the `books` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Book {
    pub book_id: String,
    pub title: String,
    pub year_published: Option<i64>,
    /// Soft reference to `authors.author_id`; may name an author that does not exist
    pub author_id: Option<String>,
}

impl Book {
    pub fn new(
        book_id: impl Into<String>,
        title: impl Into<String>,
        year_published: i64,
        author_id: Option<&str>,
    ) -> Self {
        Self {
            book_id: book_id.into(),
            title: title.into(),
            year_published: Some(year_published),
            author_id: author_id.map(str::to_string),
        }
    }
}
