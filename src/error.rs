//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendError {
    /// Category key outside the fixed registry
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Amount that is not a usable number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Record index outside the collection
    #[error("Index {index} is out of range (collection has {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    /// File I/O errors, including failed persistence and export writes
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors for record fields
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SpendError {
    /// Create an index error for a collection of the given length
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

impl From<std::io::Error> for SpendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SpendError {
    fn from(err: csv::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type SpendResult<T> = Result<T, SpendError>;
