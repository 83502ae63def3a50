//! Configuration loading and root folder resolution
//!
//! Root folder priority order:
//! 1. Command-line argument (highest priority)
//! 2. `BOOKDB_ROOT_FOLDER` environment variable
//! 3. `root_folder` key of the TOML config file
//! 4. Current directory (fallback)
//!
//! A missing or unreadable config file is never fatal.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const ROOT_FOLDER_ENV: &str = "BOOKDB_ROOT_FOLDER";
pub const LOCAL_CONFIG_FILE: &str = "bookdb.toml";

pub const DEFAULT_DATABASE_FILE: &str = "project.sqlite3";
pub const DEFAULT_AUTHORS_CSV: &str = "data/authors.csv";
pub const DEFAULT_BOOKS_CSV: &str = "data/books.csv";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Contents of a `bookdb.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub authors_csv: Option<PathBuf>,
    pub books_csv: Option<PathBuf>,
    pub busy_timeout_ms: Option<u64>,
}

impl TomlConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Resolved locations of the store and the two CSV sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookdbConfig {
    pub root_folder: PathBuf,
    pub database_path: PathBuf,
    pub authors_csv: PathBuf,
    pub books_csv: PathBuf,
    pub busy_timeout_ms: u64,
}

impl BookdbConfig {
    /// Compiled defaults beneath `root_folder`
    pub fn with_root(root_folder: impl Into<PathBuf>) -> Self {
        let root_folder = root_folder.into();
        Self {
            database_path: root_folder.join(DEFAULT_DATABASE_FILE),
            authors_csv: root_folder.join(DEFAULT_AUTHORS_CSV),
            books_csv: root_folder.join(DEFAULT_BOOKS_CSV),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            root_folder,
        }
    }

    /// Apply TOML overrides; relative paths are taken from `root_folder`
    pub fn from_toml(root_folder: impl Into<PathBuf>, toml: &TomlConfig) -> Self {
        let mut config = Self::with_root(root_folder);

        if let Some(database) = &toml.database {
            config.database_path = config.root_folder.join(database);
        }
        if let Some(authors) = &toml.authors_csv {
            config.authors_csv = config.root_folder.join(authors);
        }
        if let Some(books) = &toml.books_csv {
            config.books_csv = config.root_folder.join(books);
        }
        if let Some(timeout) = toml.busy_timeout_ms {
            config.busy_timeout_ms = timeout;
        }

        config
    }

    /// Resolve the full configuration from CLI, environment, and config file
    pub fn resolve(cli_root_folder: Option<&Path>) -> Self {
        let toml = match locate_config_file() {
            Some(path) => match TomlConfig::load(&path) {
                Ok(toml) => {
                    debug!("Loaded config file: {}", path.display());
                    toml
                }
                Err(e) => {
                    warn!("Ignoring config file {}: {}", path.display(), e);
                    TomlConfig::default()
                }
            },
            None => TomlConfig::default(),
        };

        let root_folder = resolve_root_folder(cli_root_folder, &toml);
        Self::from_toml(root_folder, &toml)
    }
}

/// Pick the root folder following the module-level priority order
pub fn resolve_root_folder(cli_arg: Option<&Path>, toml: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &toml.root_folder {
        return path.clone();
    }

    // Priority 4: current directory
    PathBuf::from(".")
}

/// `./bookdb.toml` first, then `<config dir>/bookdb/config.toml`
fn locate_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("bookdb").join("config.toml");
    user.exists().then_some(user)
}
