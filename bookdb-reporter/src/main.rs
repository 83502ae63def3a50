//! bookdb-report - Print aggregate reports over a loaded bookdb store
//!
//! Read-only: the store must already have been created by bookdb-load.

use anyhow::{Context, Result};
use bookdb_common::config::BookdbConfig;
use bookdb_common::db::Store;
use bookdb_reporter::report;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for bookdb-report
#[derive(Parser, Debug)]
#[command(name = "bookdb-report")]
#[command(about = "Print aggregate reports over the bookdb store")]
#[command(version)]
struct Args {
    /// Folder holding the store
    #[arg(short, long)]
    root_folder: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    bookdb_common::logging::init_tracing("info");

    let args = Args::parse();
    let config = BookdbConfig::resolve(args.root_folder.as_deref());
    let store = Store::from_config(&config);
    info!("Database path: {}", store.path().display());

    let analysis = report(&store)
        .await
        .context("Failed to analyze store (run bookdb-load first)")?;

    print!("{}", analysis);
    Ok(())
}
