//! Access token and auth API payload types

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Short-lived bearer credential authorizing API requests.
///
/// An `AccessToken` is never empty. It lives in memory only and is never
/// written to durable storage.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a token from a raw string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyToken`] if the value is empty or only
    /// whitespace, and [`DomainError::MalformedToken`] if it contains
    /// anything but visible ASCII.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyToken);
        }
        if !value.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(DomainError::MalformedToken);
        }
        Ok(Self(value))
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Get a preview of the token (first 8 chars + ...).
    #[must_use]
    pub fn preview(&self) -> String {
        if self.0.len() > 12 {
            let cut = self
                .0
                .char_indices()
                .nth(8)
                .map_or(self.0.len(), |(idx, _)| idx);
            format!("{}...", &self.0[..cut])
        } else {
            "***".to_string()
        }
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&self.preview()).finish()
    }
}

impl TryFrom<String> for AccessToken {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Body returned by `POST /auth/refresh-token`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    /// The new access token, absent when the backend declines silently.
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Body sent to `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Body returned by `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Issued access token.
    pub access_token: String,
    /// Librarian first name.
    pub first_name: String,
    /// Librarian last name.
    pub last_name: String,
    /// Librarian email.
    pub email: String,
    /// Backend user id.
    #[serde(rename = "_id")]
    pub id: String,
}

/// Body sent to `POST /auth/signUp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email.
    pub email: String,
    /// Password.
    pub password: String,
    /// Role, e.g. `librarian` or `admin`.
    pub role: String,
}

/// Body returned by `POST /auth/signUp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email.
    pub email: String,
    /// Role.
    pub role: String,
    /// Backend user id.
    #[serde(rename = "_id")]
    pub id: String,
}

/// Profile of the signed-in librarian (`GET /auth/get-profile`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend user id.
    #[serde(rename = "_id")]
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email.
    pub email: String,
    /// Role.
    #[serde(default)]
    pub role: String,
}

/// Partial profile update (`PUT /auth/update-profile`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

/// Body sent to `POST /auth/change-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    /// Current password.
    pub current_password: String,
    /// Replacement password.
    pub new_password: String,
}
