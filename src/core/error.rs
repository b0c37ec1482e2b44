/// crudql Error Module
///
/// This module defines the structured error types shared by every
/// data-access operation in the crate. It provides proper error
/// propagation and user-friendly error messages in place of collapsed
/// boolean success flags.
use thiserror::Error;

/// Error type covering all failure modes of the crate:
/// - Driver-level database errors (connect, prepare, execute, fetch)
/// - Constraint violations reported by SQLite
/// - Rejected table or column identifiers
/// - Structurally invalid operation input
/// - Configuration loading and validation
/// - File system operations
/// - JSON export
#[derive(Error, Debug)]
pub enum CrudqlError {
    /// Database-related errors from SQLite operations
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Constraint violations (UNIQUE, NOT NULL, CHECK, FOREIGN KEY)
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Table or column names that failed identifier validation
    #[error("Invalid identifier: {0}")]
    Identifier(String),

    /// Malformed operation input (empty column lists and the like)
    #[error("Input error: {0}")]
    Input(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CrudqlError {
    /// Splits SQLite constraint failures out of the generic driver error so
    /// callers can branch on them without digging through `rusqlite::Error`.
    pub(crate) fn classify(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                CrudqlError::Constraint(message.unwrap_or_else(|| code.to_string()))
            }
            other => CrudqlError::Database(other),
        }
    }
}

/// Type alias for Result to use CrudqlError as the error type.
///
/// This provides a consistent error type across the entire crate
/// instead of using `Result<T, String>` or mixed error types.
pub type Result<T> = std::result::Result<T, CrudqlError>;
