//! CSV sources for authors and books
//!
//! Both files need a header row naming at least the required columns.
//! Extra columns are ignored.

use bookdb_common::config::BookdbConfig;
use bookdb_common::db::{Author, Book};
use bookdb_common::{Error, Result};
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const AUTHOR_COLUMNS: [&str; 3] = ["author_id", "first", "last"];
pub const BOOK_COLUMNS: [&str; 4] = ["book_id", "title", "year_published", "author_id"];

/// Paths of the two CSV sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFiles {
    pub authors: PathBuf,
    pub books: PathBuf,
}

impl SourceFiles {
    pub fn new(authors: impl Into<PathBuf>, books: impl Into<PathBuf>) -> Self {
        Self {
            authors: authors.into(),
            books: books.into(),
        }
    }

    pub fn from_config(config: &BookdbConfig) -> Self {
        Self::new(&config.authors_csv, &config.books_csv)
    }
}

/// Books record before year coercion
#[derive(Debug, Deserialize)]
struct BookRecord {
    book_id: String,
    title: String,
    year_published: String,
    author_id: String,
}

impl BookRecord {
    fn into_book(self, path: &Path, line: u64) -> Result<Book> {
        let year_published = self.year_published.trim().parse::<i64>().map_err(|_| {
            Error::DataFormat {
                file: path.to_path_buf(),
                line,
                message: format!(
                    "year_published '{}' is not an integer (book_id {})",
                    self.year_published, self.book_id
                ),
            }
        })?;

        // An empty cell means the book has no author reference
        let author_id = Some(self.author_id).filter(|id| !id.is_empty());

        Ok(Book {
            book_id: self.book_id,
            title: self.title,
            year_published: Some(year_published),
            author_id,
        })
    }
}

/// Read every record of the authors source
pub fn read_authors(path: &Path) -> Result<Vec<Author>> {
    let mut reader = open_csv(path, &AUTHOR_COLUMNS)?;

    let authors = reader
        .deserialize::<Author>()
        .map(|record| record.map_err(|e| record_error(path, e)))
        .collect::<Result<Vec<_>>>()?;

    debug!("Read {} author record(s) from {}", authors.len(), path.display());
    Ok(authors)
}

/// Read every record of the books source, coercing `year_published` to an integer
pub fn read_books(path: &Path) -> Result<Vec<Book>> {
    let mut reader = open_csv(path, &BOOK_COLUMNS)?;
    let headers = reader.headers()?.clone();

    let mut books = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| record_error(path, e))?;
        let line = record.position().map_or(0, |p| p.line());
        let raw: BookRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| record_error(path, e))?;
        books.push(raw.into_book(path, line)?);
    }

    debug!("Read {} book record(s) from {}", books.len(), path.display());
    Ok(books)
}

fn open_csv(path: &Path, required: &[&str]) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::MissingFile(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers().map_err(|e| record_error(path, e))?;

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(Error::DataFormat {
            file: path.to_path_buf(),
            line: 1,
            message: format!("missing column(s): {}", missing.join(", ")),
        });
    }

    Ok(reader)
}

/// I/O failures stay CSV errors; anything tied to a record is a format error
fn record_error(path: &Path, e: csv::Error) -> Error {
    if let csv::ErrorKind::Io(_) = e.kind() {
        return Error::Csv(e);
    }

    Error::DataFormat {
        file: path.to_path_buf(),
        line: e.position().map_or(0, |p| p.line()),
        message: e.to_string(),
    }
}
