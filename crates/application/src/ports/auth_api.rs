//! Auth backend port.

use async_trait::async_trait;
use libris_domain::{
    LoginRequest, LoginResponse, PasswordChange, ProfileUpdate, RefreshResponse, SignUpRequest,
    SignUpResponse, UserProfile,
};
use thiserror::Error;

/// Errors returned by the auth backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, if any.
        message: String,
    },

    /// The response body could not be understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,
}

impl AuthApiError {
    /// Returns true for 401/403 responses.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// The external auth API consumed by the session core.
///
/// Every call except [`AuthApi::refresh`] and [`AuthApi::login`] relies on
/// the token currently bound to the HTTP client.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/refresh-token`, authenticated by the ambient refresh cookie.
    async fn refresh(&self) -> Result<RefreshResponse, AuthApiError>;

    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthApiError>;

    /// `POST /auth/signUp`.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthApiError>;

    /// `GET /auth/get-profile`.
    async fn get_profile(&self) -> Result<UserProfile, AuthApiError>;

    /// `PUT /auth/update-profile`.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, AuthApiError>;

    /// `POST /auth/change-password`.
    async fn change_password(&self, change: &PasswordChange) -> Result<(), AuthApiError>;
}
