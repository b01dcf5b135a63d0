//! Login use case.

use std::sync::Arc;

use libris_domain::{AccessToken, LoginForm, LoginResponse, NavigateOptions, paths};
use tracing::{info, warn};

use crate::auth::SessionController;
use crate::error::ApplicationResult;
use crate::ports::{AuthApi, Navigator, Notification, Notifier};

/// Shown after a successful login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login Successfully!";
/// Shown after a failed login.
pub const LOGIN_FAILURE_MESSAGE: &str = "Login Unsuccessful";

/// Use case for the login page's submit action.
///
/// On success the session is signed in, a notification is shown and the
/// user is sent to the dashboard. On failure the session is left as it
/// was and the error is returned for display.
pub struct LoginUser {
    api: Arc<dyn AuthApi>,
    session: Arc<SessionController>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl LoginUser {
    /// Creates a new `LoginUser` use case.
    #[must_use]
    pub fn new(
        api: Arc<dyn AuthApi>,
        session: Arc<SessionController>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            notifier,
        }
    }

    /// Validates the form, logs in and navigates to the dashboard.
    ///
    /// # Errors
    /// - Returns a domain error with per-field messages if the form is invalid
    ///   (no notification, the page shows the field errors)
    /// - Returns an auth error if the backend rejects the credentials
    /// - Returns a domain error if the backend issued an empty or malformed token
    pub async fn execute(&self, form: &LoginForm) -> ApplicationResult<LoginResponse> {
        let request = form.validate()?;

        let response = match self.api.login(&request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "login rejected");
                self.notifier.notify(Notification::error(LOGIN_FAILURE_MESSAGE));
                return Err(error.into());
            }
        };

        let token = match AccessToken::new(response.access_token.clone()) {
            Ok(token) => token,
            Err(error) => {
                warn!(%error, "login response carried an unusable token");
                self.notifier.notify(Notification::error(LOGIN_FAILURE_MESSAGE));
                return Err(error.into());
            }
        };

        self.session.login(token);
        info!(user_id = %response.id, "librarian logged in");
        self.notifier.notify(Notification::success(LOGIN_SUCCESS_MESSAGE));
        // The redirect effect may already have moved us there.
        if self.navigator.current_path() != paths::DASHBOARD {
            self.navigator.navigate(paths::DASHBOARD, NavigateOptions::PUSH);
        }

        Ok(response)
    }
}
