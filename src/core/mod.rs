/// Core Module for crudql
///
/// This module contains the shared infrastructure the data-access layer
/// is built on: the crate-wide error type and `Result` alias.

pub mod error;

// Re-export commonly used types for convenience
pub use error::{CrudqlError, Result};
