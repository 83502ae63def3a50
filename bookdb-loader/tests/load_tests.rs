//! Integration tests for loading CSV sources into an on-disk store
//!
//! Each test gets its own TempDir holding the CSV files and the store.

use bookdb_common::db::{release, table_counts, Store};
use bookdb_common::Error;
use bookdb_loader::{initialize, LoadSummary, SourceFiles};
use std::path::Path;
use tempfile::TempDir;

const AUTHORS_CSV: &str = "\
author_id,first,last
A1,J.R.R.,Tolkien
A2,Ursula,Le Guin
A3,J.R.R.,Tolkien
A4,Unpublished,Writer
";

const BOOKS_CSV: &str = "\
book_id,title,year_published,author_id
B1,The Hobbit,1937,A1
B2,A Wizard of Earthsea,1968,A2
B3,The Silmarillion,1977,A3
B4,Orphaned Manuscript,2001,A99
";

/// Write both sources into `dir` and return the matching SourceFiles
fn write_sources(dir: &Path, authors: &str, books: &str) -> SourceFiles {
    let data = dir.join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("authors.csv"), authors).unwrap();
    std::fs::write(data.join("books.csv"), books).unwrap();
    SourceFiles::new(data.join("authors.csv"), data.join("books.csv"))
}

#[tokio::test]
async fn test_initialize_creates_store() {
    let temp_dir = TempDir::new().unwrap();
    let sources = write_sources(temp_dir.path(), AUTHORS_CSV, BOOKS_CSV);
    let store = Store::new(temp_dir.path().join("project.sqlite3"));

    let summary = initialize(&sources, &store).await.expect("Load failed");

    assert!(store.exists(), "Store file was not created");
    assert_eq!(
        summary,
        LoadSummary {
            authors_total: 4,
            books_total: 4,
            authors_inserted: 4,
            books_inserted: 4,
        }
    );
}

#[tokio::test]
async fn test_reload_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let sources = write_sources(temp_dir.path(), AUTHORS_CSV, BOOKS_CSV);
    let store = Store::new(temp_dir.path().join("project.sqlite3"));

    let first = initialize(&sources, &store).await.unwrap();
    let second = initialize(&sources, &store).await.unwrap();

    assert_eq!(first.authors_total, second.authors_total);
    assert_eq!(first.books_total, second.books_total);
    assert_eq!(second.authors_inserted, 0);
    assert_eq!(second.books_inserted, 0);
}

#[tokio::test]
async fn test_reload_adds_only_new_rows() {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::new(temp_dir.path().join("project.sqlite3"));
    let sources = write_sources(temp_dir.path(), AUTHORS_CSV, BOOKS_CSV);
    initialize(&sources, &store).await.unwrap();

    let grown_authors = format!("{}A5,Octavia,Butler\n", AUTHORS_CSV);
    let sources = write_sources(temp_dir.path(), &grown_authors, BOOKS_CSV);
    let summary = initialize(&sources, &store).await.unwrap();

    assert_eq!(summary.authors_inserted, 1);
    assert_eq!(summary.authors_total, 5);
    assert_eq!(summary.books_inserted, 0);
}

#[tokio::test]
async fn test_bad_year_aborts_before_any_insert() {
    let temp_dir = TempDir::new().unwrap();
    let books = "book_id,title,year_published,author_id\nB1,Good,1937,A1\nB2,Bad,MCMXL,A1\n";
    let sources = write_sources(temp_dir.path(), AUTHORS_CSV, books);
    let store = Store::new(temp_dir.path().join("project.sqlite3"));

    let result = initialize(&sources, &store).await;

    assert!(
        matches!(result, Err(Error::DataFormat { line: 3, .. })),
        "Expected DataFormat on line 3, got {:?}",
        result
    );
    assert!(!store.exists(), "No store should be created when a source is malformed");
}

#[tokio::test]
async fn test_bad_year_leaves_existing_store_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::new(temp_dir.path().join("project.sqlite3"));
    let sources = write_sources(temp_dir.path(), AUTHORS_CSV, BOOKS_CSV);
    initialize(&sources, &store).await.unwrap();

    let broken = format!("{}B5,Later,unknown,A1\n", BOOKS_CSV);
    let sources = write_sources(
        temp_dir.path(),
        &format!("{}A5,Octavia,Butler\n", AUTHORS_CSV),
        &broken,
    );
    assert!(initialize(&sources, &store).await.is_err());

    let mut conn = store.connect_readonly().await.unwrap();
    let counts = table_counts(&mut conn).await.unwrap();
    release(conn).await;
    assert_eq!(counts.authors, 4);
    assert_eq!(counts.books, 4);
}

#[tokio::test]
async fn test_missing_source_file() {
    let temp_dir = TempDir::new().unwrap();
    let sources = SourceFiles::new(
        temp_dir.path().join("data/authors.csv"),
        temp_dir.path().join("data/books.csv"),
    );
    let store = Store::new(temp_dir.path().join("project.sqlite3"));

    let result = initialize(&sources, &store).await;

    match result {
        Err(Error::MissingFile(path)) => assert!(path.ends_with("authors.csv")),
        other => panic!("Expected MissingFile, got {:?}", other),
    }
}

#[tokio::test]
async fn test_orphan_and_blank_author_references_load() {
    let temp_dir = TempDir::new().unwrap();
    let books = "book_id,title,year_published,author_id\nB1,Orphan,1999,A99\nB2,Anonymous,1700,\n";
    let sources = write_sources(temp_dir.path(), AUTHORS_CSV, books);
    let store = Store::new(temp_dir.path().join("project.sqlite3"));

    let summary = initialize(&sources, &store).await.unwrap();
    assert_eq!(summary.books_total, 2);

    let mut conn = store.connect_readonly().await.unwrap();
    let blank: Option<String> =
        sqlx::query_scalar("SELECT author_id FROM books WHERE book_id = 'B2'")
            .fetch_one(&mut conn)
            .await
            .unwrap();
    release(conn).await;
    assert_eq!(blank, None);
}
