//! Core error types for the quote store.
//!
//! Storage-specific failures are converted to [`Error::Storage`] by the
//! storage layer so this type stays backend-agnostic.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for quote operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No quote with the requested id exists.
    #[error("Quote {0} not found")]
    NotFound(i32),

    /// A positional window falls outside the collection.
    #[error("Index range {start}..{end} out of bounds for collection of size {len}")]
    Range { start: i64, end: i64, len: usize },

    #[error("Storage operation failed: {0}")]
    Storage(String),
}

