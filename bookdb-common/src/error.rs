//! Common error types for bookdb

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for bookdb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared by the loader and the reporter
#[derive(Error, Debug)]
pub enum Error {
    /// A CSV source file does not exist
    #[error("Source file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// A CSV source has a missing column or a value that cannot be coerced
    #[error("Data format error in {} (line {line}): {message}", .file.display())]
    DataFormat {
        file: PathBuf,
        line: u64,
        message: String,
    },

    /// The store file or one of its tables is absent
    #[error("Store not initialized: {0}")]
    StoreNotInitialized(String),

    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// CSV reader error not attributable to a single record
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
