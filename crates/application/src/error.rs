//! Application error types

use libris_domain::DomainError;
use thiserror::Error;

use crate::ports::AuthApiError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The auth backend rejected or failed a call.
    #[error("auth API error: {0}")]
    Auth(#[from] AuthApiError),

    /// The operation requires a signed-in session.
    #[error("not authenticated")]
    NotAuthenticated,
}

impl ApplicationError {
    /// Returns the per-field form errors, if this is a validation failure.
    #[must_use]
    pub const fn form_errors(&self) -> Option<&libris_domain::FormErrors> {
        match self {
            Self::Domain(DomainError::InvalidForm(errors)) => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
