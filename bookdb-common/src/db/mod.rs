//! Store handle, schema and row models

pub mod models;
pub mod schema;
pub mod store;

pub use models::*;
pub use schema::*;
pub use store::*;
