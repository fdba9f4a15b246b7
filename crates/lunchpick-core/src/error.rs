//! Error types for the lunchpick application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire lunchpick application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum LunchError {
    /// A raw record from the remote store failed the shape check.
    /// Handled by silent exclusion from the working set.
    #[error("Invalid restaurant record: {0}")]
    Validation(String),

    /// A gateway call failed (transport or non-success status).
    #[error("Network error: {message}")]
    Network { message: String },

    /// A component was called outside its contract (e.g. picking from an
    /// empty collection).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The one-shot bulk reset was already used this session.
    #[error("Pick counters were already reset this session")]
    ResetAlreadyUsed,

    /// Missing or unusable external configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LunchError {
    /// Creates a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error is worth retrying (only transient gateway
    /// failures are).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

/// A type alias for `Result<T, LunchError>`.
pub type Result<T> = std::result::Result<T, LunchError>;
