//! Schema creation and verification
//!
//! `ensure_schema` is idempotent and safe to call on every load.
//! `verify_schema` never creates anything; readers use it to fail fast.

use crate::{Error, Result};
use sqlx::SqliteConnection;
use tracing::debug;

pub const AUTHORS_TABLE: &str = "authors";
pub const BOOKS_TABLE: &str = "books";

/// Row totals for both tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableCounts {
    pub authors: i64,
    pub books: i64,
}

/// Create the authors and books tables if they don't exist
pub async fn ensure_schema(conn: &mut SqliteConnection) -> Result<()> {
    create_authors_table(conn).await?;
    create_books_table(conn).await?;
    debug!("Schema ensured ({}, {})", AUTHORS_TABLE, BOOKS_TABLE);
    Ok(())
}

async fn create_authors_table(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            author_id TEXT PRIMARY KEY,
            first TEXT NOT NULL,
            last TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn create_books_table(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            book_id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            year_published INTEGER,
            author_id TEXT,
            FOREIGN KEY (author_id) REFERENCES authors(author_id)
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Check that both tables exist, naming any that are missing
pub async fn verify_schema(conn: &mut SqliteConnection) -> Result<()> {
    let present: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN (?, ?)",
    )
    .bind(AUTHORS_TABLE)
    .bind(BOOKS_TABLE)
    .fetch_all(&mut *conn)
    .await?;

    let missing: Vec<&str> = [AUTHORS_TABLE, BOOKS_TABLE]
        .into_iter()
        .filter(|table| !present.iter().any(|name| name == table))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::StoreNotInitialized(format!(
            "missing table(s): {}",
            missing.join(", ")
        )))
    }
}

/// Count every row in both tables
pub async fn table_counts(conn: &mut SqliteConnection) -> Result<TableCounts> {
    let authors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
        .fetch_one(&mut *conn)
        .await?;
    let books: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(&mut *conn)
        .await?;

    Ok(TableCounts { authors, books })
}
