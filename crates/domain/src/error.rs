//! Domain error types

use thiserror::Error;

use crate::auth::FormErrors;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An access token was empty or whitespace only.
    #[error("access token must not be empty")]
    EmptyToken,

    /// An access token contained characters that cannot be sent in an
    /// `Authorization` header.
    #[error("access token contains characters not allowed in a header")]
    MalformedToken,

    /// A submitted form failed validation.
    #[error("invalid form: {0}")]
    InvalidForm(FormErrors),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
