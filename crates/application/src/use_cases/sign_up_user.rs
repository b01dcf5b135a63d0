//! Sign-up use case.

use std::sync::Arc;

use libris_domain::{SignUpForm, SignUpResponse};
use tracing::{info, warn};

use crate::error::ApplicationResult;
use crate::ports::{AuthApi, Notification, Notifier};

/// Shown after an account was created.
pub const SIGN_UP_SUCCESS_MESSAGE: &str = "Your account was created successfully!";
/// Shown when account creation failed.
pub const SIGN_UP_FAILURE_MESSAGE: &str = "Your account could not be created";

/// Use case for the sign-up page.
///
/// Creating an account does not sign the user in; the session is untouched.
pub struct SignUpUser {
    api: Arc<dyn AuthApi>,
    notifier: Arc<dyn Notifier>,
}

impl SignUpUser {
    /// Creates a new `SignUpUser` use case.
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    /// Validates the form and registers the account.
    ///
    /// # Errors
    /// - Returns a domain error with per-field messages if the form is invalid
    /// - Returns an auth error if the backend refuses the registration
    pub async fn execute(&self, form: &SignUpForm) -> ApplicationResult<SignUpResponse> {
        let request = form.validate()?;

        match self.api.sign_up(&request).await {
            Ok(response) => {
                info!(user_id = %response.id, role = %response.role, "account created");
                self.notifier
                    .notify(Notification::success(SIGN_UP_SUCCESS_MESSAGE));
                Ok(response)
            }
            Err(error) => {
                warn!(%error, "sign-up failed");
                self.notifier
                    .notify(Notification::error(SIGN_UP_FAILURE_MESSAGE));
                Err(error.into())
            }
        }
    }
}
