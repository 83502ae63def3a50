//! Report and sample entry points
//!
//! Each entry point opens one read-only connection, verifies the schema, runs
//! its queries, and releases the connection before returning.

use crate::queries::{
    books_by_era, books_per_author, duplicate_authors, first_authors, first_books,
    first_books_with_authors, AuthorBookCount, BookWithAuthor, DuplicateAuthor, EraCount,
};
use bookdb_common::db::{release, verify_schema, Author, Book, Store};
use bookdb_common::Result;
use sqlx::SqliteConnection;
use tracing::info;

/// Rows shown per section of the sample dump
pub const SAMPLE_LIMIT: i64 = 3;

/// Output of the three analytical queries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisResult {
    pub books_per_author: Vec<AuthorBookCount>,
    pub books_by_era: Vec<EraCount>,
    /// Empty when every (first, last) pair is unique
    pub duplicate_authors: Vec<DuplicateAuthor>,
}

/// Raw rows for manual verification
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleResult {
    pub limit: i64,
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
    pub books_with_authors: Vec<BookWithAuthor>,
}

/// Run the analytical queries against `store`
pub async fn report(store: &Store) -> Result<AnalysisResult> {
    let mut conn = store.connect_readonly().await?;
    let result = analyze(&mut conn).await;
    release(conn).await;
    result
}

/// Run the analytical queries on an open connection
pub async fn analyze(conn: &mut SqliteConnection) -> Result<AnalysisResult> {
    verify_schema(conn).await?;

    let analysis = AnalysisResult {
        books_per_author: books_per_author(conn).await?,
        books_by_era: books_by_era(conn).await?,
        duplicate_authors: duplicate_authors(conn).await?,
    };

    info!(
        "Analyzed {} author(s) across {} period(s); {} duplicate name(s)",
        analysis.books_per_author.len(),
        analysis.books_by_era.len(),
        analysis.duplicate_authors.len()
    );

    Ok(analysis)
}

/// Fetch the first [`SAMPLE_LIMIT`] rows of each sample section from `store`
pub async fn sample(store: &Store) -> Result<SampleResult> {
    let mut conn = store.connect_readonly().await?;
    let result = collect_sample(&mut conn, SAMPLE_LIMIT).await;
    release(conn).await;
    result
}

pub async fn collect_sample(conn: &mut SqliteConnection, limit: i64) -> Result<SampleResult> {
    verify_schema(conn).await?;

    Ok(SampleResult {
        limit,
        authors: first_authors(conn, limit).await?,
        books: first_books(conn, limit).await?,
        books_with_authors: first_books_with_authors(conn, limit).await?,
    })
}
