//! Failure taxonomy for remote operations.

use thiserror::Error;

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No authentication token found")]
    MissingAuth,

    #[error("HTTP error! status: {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Whether retrying the same request later can reasonably succeed.
    ///
    /// Transport failures and server-side errors are transient; auth,
    /// client errors, and shape mismatches need intervention first.
    pub fn is_retriable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => *status == 429 || *status >= 500,
            ApiError::MissingAuth | ApiError::InvalidResponse(_) => false,
        }
    }
}
