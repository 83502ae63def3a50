//! Store handle and scoped connections
//!
//! Every operation opens one connection through [`Store`], does its work, and
//! hands the connection back to [`release`] on all exit paths.

use crate::config::{BookdbConfig, DEFAULT_BUSY_TIMEOUT_MS};
use crate::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

/// Location of the on-disk relational store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
    busy_timeout: Duration,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    pub fn from_config(config: &BookdbConfig) -> Self {
        Self::new(&config.database_path)
            .with_busy_timeout(Duration::from_millis(config.busy_timeout_ms))
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Open a read-write connection, creating the database file if needed
    pub async fn connect_rwc(&self) -> Result<SqliteConnection> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let newly_created = !self.exists();
        let conn = self.options().create_if_missing(true).connect().await?;

        if newly_created {
            debug!("Created new store: {}", self.path.display());
        } else {
            debug!("Opened existing store: {}", self.path.display());
        }

        Ok(conn)
    }

    /// Open a read-only connection to an existing database file.
    ///
    /// Never creates the file: a missing store is `StoreNotInitialized`.
    pub async fn connect_readonly(&self) -> Result<SqliteConnection> {
        if !self.exists() {
            return Err(Error::StoreNotInitialized(format!(
                "database not found: {}",
                self.path.display()
            )));
        }

        let conn = self
            .options()
            .create_if_missing(false)
            .read_only(true)
            .connect()
            .await?;

        debug!("Opened store (read-only): {}", self.path.display());
        Ok(conn)
    }

    fn options(&self) -> SqliteConnectOptions {
        // sqlx turns foreign key enforcement on by default; books may reference
        // authors that were never loaded.
        SqliteConnectOptions::new()
            .filename(&self.path)
            .foreign_keys(false)
            .busy_timeout(self.busy_timeout)
    }
}

/// Open a private in-memory store with the same connection settings as [`Store`]
pub async fn connect_in_memory() -> Result<SqliteConnection> {
    let conn = SqliteConnectOptions::from_str("sqlite::memory:")?
        .foreign_keys(false)
        .connect()
        .await?;
    Ok(conn)
}

/// Close a connection obtained from [`Store`].
///
/// A close failure is logged and swallowed so it never masks the result of
/// the operation that used the connection.
pub async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close store connection: {}", e);
    }
}
