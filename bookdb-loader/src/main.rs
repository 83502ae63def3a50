//! bookdb-load - Load the authors and books CSV sources into the store
//!
//! Safe to re-run: rows already present are skipped.

use anyhow::{Context, Result};
use bookdb_common::config::BookdbConfig;
use bookdb_common::db::Store;
use bookdb_loader::{initialize, SourceFiles};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for bookdb-load
#[derive(Parser, Debug)]
#[command(name = "bookdb-load")]
#[command(about = "Load authors and books CSV files into the bookdb store")]
#[command(version)]
struct Args {
    /// Folder holding the store and the data/ directory
    #[arg(short, long)]
    root_folder: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    bookdb_common::logging::init_tracing("info");

    let args = Args::parse();
    let config = BookdbConfig::resolve(args.root_folder.as_deref());
    info!("Database path: {}", config.database_path.display());

    let summary = initialize(&SourceFiles::from_config(&config), &Store::from_config(&config))
        .await
        .context("Failed to load CSV sources")?;

    println!("{}", summary);
    Ok(())
}
