// Error Types
// Fetch collaborator failures and application errors

use thiserror::Error;

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Failures of the NeoWs fetch collaborator
#[derive(Debug, Error)]
pub enum FetchError {
    /// The catalog has no object with this reference id
    #[error("NEO with ID '{0}' not found in NASA database")]
    NotFound(String),

    /// The request never produced a response
    #[error("Failed to reach NASA API: {0}")]
    Connection(#[source] reqwest::Error),

    /// Non-success status other than 404
    #[error("HTTP Error: {status} - {message}")]
    Http { status: u16, message: String },

    /// Response body is not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Application errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command line input
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }
}
