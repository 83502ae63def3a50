//! bookdb-init - Load the CSV sources, then dump a few raw rows for inspection

use anyhow::{Context, Result};
use bookdb_common::config::BookdbConfig;
use bookdb_common::db::Store;
use bookdb_loader::{initialize, SourceFiles};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bookdb-init")]
#[command(about = "Load the bookdb store and print sample rows")]
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
    let store = Store::from_config(&config);
    info!("Database path: {}", store.path().display());

    let summary = initialize(&SourceFiles::from_config(&config), &store)
        .await
        .context("Failed to load CSV sources")?;
    println!("{}", summary);

    let sample = bookdb_reporter::sample(&store)
        .await
        .context("Failed to read sample rows")?;
    print!("{}", sample);

    Ok(())
}
