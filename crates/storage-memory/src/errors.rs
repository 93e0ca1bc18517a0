//! Storage-specific error types for in-memory operations.

use quotebook_core::errors::Error;
use thiserror::Error;

/// Errors internal to the storage layer, converted to
/// `quotebook_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Collection lock poisoned by a panicked writer")]
    LockPoisoned,

    #[error("Quote id counter exhausted")]
    IdsExhausted,
}

impl<T> From<std::sync::PoisonError<T>> for StorageError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        StorageError::LockPoisoned
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Storage(err.to_string())
    }
}
