//! Infrastructure error types

use thiserror::Error;

/// Errors raised while setting up adapters.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Configuration could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The API base URL is not an absolute http(s) URL.
    #[error("invalid API base URL {url:?}: {message}")]
    InvalidBaseUrl {
        /// The offending value.
        url: String,
        /// Why it was rejected.
        message: String,
    },

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Result type alias for infrastructure setup.
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
