//! Error types for the card provider.

use thiserror::Error;

/// Errors that can occur while fetching a batch.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP client could not be constructed
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    /// Batch URL could not be built from the configured base URL
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to reach the API
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// API answered with a non-success status
    #[error("Cat API returned status {status}")]
    Status { status: u16 },

    /// Response body was not a JSON array of records
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Get error type string for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            ProviderError::Client(_) => "client_error",
            ProviderError::InvalidUrl { .. } => "invalid_url",
            ProviderError::Connection { .. } => "connection_error",
            ProviderError::Timeout { .. } => "request_timeout",
            ProviderError::Status { .. } => "status_error",
            ProviderError::Decode(_) => "decode_error",
        }
    }

    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProviderError::Client(_) | ProviderError::InvalidUrl { .. } => {
                "The cat API is misconfigured"
            }
            ProviderError::Connection { .. } => "Could not reach the cat API",
            ProviderError::Timeout { .. } => "The cat API took too long to answer",
            ProviderError::Status { .. } => "The cat API refused the request",
            ProviderError::Decode(_) => "The cat API sent something that is not cats",
        }
    }
}
