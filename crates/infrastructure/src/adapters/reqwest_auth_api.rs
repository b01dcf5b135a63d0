//! `AuthApi` adapter speaking JSON over the shared reqwest client.

use std::sync::Arc;

use async_trait::async_trait;
use libris_application::ports::{AuthApi, AuthApiError};
use libris_domain::{
    LoginRequest, LoginResponse, PasswordChange, ProfileUpdate, RefreshResponse, SignUpRequest,
    SignUpResponse, UserProfile,
};
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::reqwest_client::ReqwestApiClient;

const REFRESH_PATH: &str = "/auth/refresh-token";
const LOGIN_PATH: &str = "/auth/login";
const SIGN_UP_PATH: &str = "/auth/signUp";
const GET_PROFILE_PATH: &str = "/auth/get-profile";
const UPDATE_PROFILE_PATH: &str = "/auth/update-profile";
const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";

/// Error body returned by the backend, e.g. `{"message": "Invalid credentials"}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Auth endpoints of the Libris backend.
#[derive(Debug, Clone)]
pub struct ReqwestAuthApi {
    client: Arc<ReqwestApiClient>,
}

impl ReqwestAuthApi {
    /// Creates the adapter on top of the shared client.
    #[must_use]
    pub const fn new(client: Arc<ReqwestApiClient>) -> Self {
        Self { client }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AuthApiError> {
        let response = request.send().await.map_err(map_error)?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "auth API responded");

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or(text);
        Err(AuthApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, AuthApiError> {
        let response = self.send(request).await?;
        let text = response.text().await.map_err(map_error)?;
        serde_json::from_str(&text).map_err(|e| AuthApiError::InvalidResponse(e.to_string()))
    }
}

fn map_error(error: reqwest::Error) -> AuthApiError {
    if error.is_timeout() {
        AuthApiError::Timeout
    } else {
        AuthApiError::Network(error.to_string())
    }
}

#[async_trait]
impl AuthApi for ReqwestAuthApi {
    async fn refresh(&self) -> Result<RefreshResponse, AuthApiError> {
        self.send_json(self.client.request(Method::POST, REFRESH_PATH))
            .await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthApiError> {
        self.send_json(self.client.request(Method::POST, LOGIN_PATH).json(request))
            .await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthApiError> {
        self.send_json(self.client.request(Method::POST, SIGN_UP_PATH).json(request))
            .await
    }

    async fn get_profile(&self) -> Result<UserProfile, AuthApiError> {
        self.send_json(self.client.request(Method::GET, GET_PROFILE_PATH))
            .await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, AuthApiError> {
        self.send_json(
            self.client
                .request(Method::PUT, UPDATE_PROFILE_PATH)
                .json(update),
        )
        .await
    }

    async fn change_password(&self, change: &PasswordChange) -> Result<(), AuthApiError> {
        self.send(
            self.client
                .request(Method::POST, CHANGE_PASSWORD_PATH)
                .json(change),
        )
        .await
        .map(|_| ())
    }
}
