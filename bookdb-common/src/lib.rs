//! # bookdb Common Library
//!
//! Shared code for the bookdb loader and reporter including:
//! - Error type
//! - Configuration loading and root folder resolution
//! - Store handle, schema creation and row models
//! - Tracing setup for the binaries

pub mod config;
pub mod db;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
