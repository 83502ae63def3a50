//! bookdb-reporter - Read-only analysis of the bookdb store
//!
//! Never creates schema or writes rows. A store without the authors and books
//! tables is reported as `StoreNotInitialized`.

pub mod era;
pub mod queries;
pub mod render;
pub mod report;

pub use era::Era;
pub use queries::{AuthorBookCount, BookWithAuthor, DuplicateAuthor, EraCount};
pub use report::{analyze, collect_sample, report, sample, AnalysisResult, SampleResult, SAMPLE_LIMIT};
