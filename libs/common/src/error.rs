//! Custom error types for the common library
//!
//! This module defines the error types raised by the local storage backends.

use thiserror::Error;

/// Custom error type for local storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error occurred while reading or writing the backing file
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not hold a valid key-value document
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A thread panicked while holding the storage lock
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
