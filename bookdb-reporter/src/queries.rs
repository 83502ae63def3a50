//! Aggregate and sample queries over the authors and books tables
//!
//! All queries are plain reads against an already verified schema.

use crate::era::Era;
use bookdb_common::db::{Author, Book};
use bookdb_common::Result;
use sqlx::SqliteConnection;

/// Book count for one author; zero when the author has no books
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AuthorBookCount {
    pub author_id: String,
    pub first: String,
    pub last: String,
    pub book_count: i64,
}

/// Book count for one publication period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraCount {
    pub era: Era,
    pub book_count: i64,
}

/// A (first, last) name pair shared by more than one author row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DuplicateAuthor {
    pub first: String,
    pub last: String,
    pub count: i64,
}

/// A book joined to its author
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BookWithAuthor {
    pub title: String,
    pub year_published: Option<i64>,
    pub first: String,
    pub last: String,
}

/// Every author with its number of books, most prolific first.
///
/// Outer join: authors without books appear with a count of zero. Order among
/// equal counts is whatever the store returns.
pub async fn books_per_author(conn: &mut SqliteConnection) -> Result<Vec<AuthorBookCount>> {
    let rows = sqlx::query_as::<_, AuthorBookCount>(
        r#"
        SELECT a.author_id, a.first, a.last, COUNT(b.book_id) AS book_count
        FROM authors a
        LEFT JOIN books b ON a.author_id = b.author_id
        GROUP BY a.author_id
        ORDER BY book_count DESC
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Book counts per publication period.
///
/// Periods with no books are omitted. Periods are ordered by the earliest
/// year they contain, so the order depends on the data.
pub async fn books_by_era(conn: &mut SqliteConnection) -> Result<Vec<EraCount>> {
    let rows = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT
            CASE
                WHEN year_published < 1900 THEN 'Before 1900'
                WHEN year_published BETWEEN 1900 AND 1949 THEN '1900-1949'
                WHEN year_published BETWEEN 1950 AND 1999 THEN '1950-1999'
                ELSE '2000 and later'
            END AS period,
            COUNT(*) AS book_count
        FROM books
        GROUP BY period
        ORDER BY MIN(year_published)
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    rows.into_iter()
        .map(|(period, book_count)| -> Result<EraCount> {
            let era = period
                .parse::<Era>()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
            Ok(EraCount { era, book_count })
        })
        .collect()
}

/// Name pairs that occur on more than one author row, with their multiplicity.
/// Diagnostic only; nothing is merged.
pub async fn duplicate_authors(conn: &mut SqliteConnection) -> Result<Vec<DuplicateAuthor>> {
    let rows = sqlx::query_as::<_, DuplicateAuthor>(
        r#"
        SELECT first, last, COUNT(*) AS count
        FROM authors
        GROUP BY first, last
        HAVING COUNT(*) > 1
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// First `limit` authors in store order
pub async fn first_authors(conn: &mut SqliteConnection, limit: i64) -> Result<Vec<Author>> {
    let rows = sqlx::query_as::<_, Author>("SELECT author_id, first, last FROM authors LIMIT ?")
        .bind(limit)
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows)
}

/// First `limit` books in store order
pub async fn first_books(conn: &mut SqliteConnection, limit: i64) -> Result<Vec<Book>> {
    let rows = sqlx::query_as::<_, Book>(
        "SELECT book_id, title, year_published, author_id FROM books LIMIT ?",
    )
    .bind(limit)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// First `limit` books that have a matching author (inner join)
pub async fn first_books_with_authors(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<BookWithAuthor>> {
    let rows = sqlx::query_as::<_, BookWithAuthor>(
        r#"
        SELECT b.title, b.year_published, a.first, a.last
        FROM books b
        JOIN authors a ON b.author_id = a.author_id
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}
