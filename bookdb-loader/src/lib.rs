//! bookdb-loader - CSV ingestion into the bookdb store
//!
//! Reads the authors and books sources, ensures the schema, and inserts every
//! row with insert-or-skip semantics inside a single transaction.

pub mod load;
pub mod sources;

pub use load::{initialize, load, LoadSummary};
pub use sources::{read_authors, read_books, SourceFiles};
