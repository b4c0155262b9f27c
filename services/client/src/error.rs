//! Custom error types for the EquipTrack client

use reqwest::StatusCode;
use thiserror::Error;

/// Custom error type for the client facade
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Request { status: StatusCode },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Local session storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] common::error::StorageError),

    /// A stored record could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A date string could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ClientError {
    /// Status code carried by a `Request` error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Request { status } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for client results
pub type ClientResult<T> = Result<T, ClientError>;
