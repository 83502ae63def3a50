//! Insert-or-skip load of authors and books
//!
//! Authors go in before books. Rows whose identifier already exists are left
//! untouched (first write wins). All inserts of one run commit together.

use crate::sources::{read_authors, read_books, SourceFiles};
use bookdb_common::db::{ensure_schema, release, table_counts, Author, Book, Store};
use bookdb_common::Result;
use sqlx::{Connection, SqliteConnection};
use std::fmt;
use tracing::info;

/// Outcome of a load.
///
/// Totals describe the whole tables after the load; the `*_inserted` fields
/// count only rows this run added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub authors_total: i64,
    pub books_total: i64,
    pub authors_inserted: u64,
    pub books_inserted: u64,
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Database initialized successfully!")?;
        writeln!(f, "Authors inserted: {}", self.authors_total)?;
        write!(f, "Books inserted: {}", self.books_total)
    }
}

/// Read both sources and load them into `store`, creating the schema if needed.
///
/// Sources are parsed completely before the store is touched, so a missing
/// file or a bad year leaves the store as it was.
pub async fn initialize(sources: &SourceFiles, store: &Store) -> Result<LoadSummary> {
    let authors = read_authors(&sources.authors)?;
    let books = read_books(&sources.books)?;

    let mut conn = store.connect_rwc().await?;
    let result = ensure_and_load(&mut conn, &authors, &books).await;
    release(conn).await;
    let summary = result?;

    info!(
        "Loaded {} new author(s) and {} new book(s) into {} ({} authors, {} books total)",
        summary.authors_inserted,
        summary.books_inserted,
        store.path().display(),
        summary.authors_total,
        summary.books_total
    );

    Ok(summary)
}

async fn ensure_and_load(
    conn: &mut SqliteConnection,
    authors: &[Author],
    books: &[Book],
) -> Result<LoadSummary> {
    ensure_schema(conn).await?;
    load(conn, authors, books).await
}

/// Insert `authors` then `books` in one transaction.
///
/// The schema must already exist. On error the transaction is dropped and
/// rolled back.
pub async fn load(
    conn: &mut SqliteConnection,
    authors: &[Author],
    books: &[Book],
) -> Result<LoadSummary> {
    let mut tx = conn.begin().await?;

    let mut authors_inserted = 0;
    for author in authors {
        authors_inserted += sqlx::query(
            r#"
            INSERT OR IGNORE INTO authors (author_id, first, last)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&author.author_id)
        .bind(&author.first)
        .bind(&author.last)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    let mut books_inserted = 0;
    for book in books {
        books_inserted += sqlx::query(
            r#"
            INSERT OR IGNORE INTO books (book_id, title, year_published, author_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&book.book_id)
        .bind(&book.title)
        .bind(book.year_published)
        .bind(&book.author_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;

    let counts = table_counts(conn).await?;
    Ok(LoadSummary {
        authors_total: counts.authors,
        books_total: counts.books,
        authors_inserted,
        books_inserted,
    })
}
