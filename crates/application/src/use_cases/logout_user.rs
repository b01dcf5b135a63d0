//! Logout use case.

use std::sync::Arc;

use libris_domain::{NavigateOptions, paths};

use crate::auth::SessionController;
use crate::ports::{Navigator, Notification, Notifier};

/// Shown after logging out.
pub const LOGOUT_MESSAGE: &str = "Logout successful!";

/// Use case for the navbar's logout button.
///
/// Logout is local: the token is dropped from memory and the client. No
/// server-side revocation is attempted.
pub struct LogoutUser {
    session: Arc<SessionController>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl LogoutUser {
    /// Creates a new `LogoutUser` use case.
    #[must_use]
    pub fn new(
        session: Arc<SessionController>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session,
            navigator,
            notifier,
        }
    }

    /// Signs out and returns to the login page.
    pub fn execute(&self) {
        self.session.logout();
        self.notifier.notify(Notification::success(LOGOUT_MESSAGE));
        self.navigator.navigate(paths::LOGIN, NavigateOptions::PUSH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        FakeAuthApi, FixedClock, RecordingBinding, RecordingNavigator, RecordingNotifier,
    };
    use libris_domain::{AccessToken, SessionStatus};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_logout_clears_session_and_returns_to_login() {
        let binding = Arc::new(RecordingBinding::default());
        let navigator = Arc::new(RecordingNavigator::at("/dashboard/books"));
        let notifier = Arc::new(RecordingNotifier::default());
        let session = Arc::new(SessionController::new(
            Arc::new(FakeAuthApi::respond(Ok(Default::default()))),
            binding.clone(),
            navigator.clone(),
            Arc::new(FixedClock::default()),
        ));
        session.startup().await;
        session.login(AccessToken::new("abc123").unwrap());

        LogoutUser::new(session.clone(), navigator.clone(), notifier.clone()).execute();

        assert_eq!(session.status(), SessionStatus::ANONYMOUS);
        assert_eq!(binding.current(), None);
        assert_eq!(navigator.current_path(), "/login");
        assert_eq!(
            notifier.notifications.lock().clone(),
            vec![Notification::success("Logout successful!")]
        );
    }
}
