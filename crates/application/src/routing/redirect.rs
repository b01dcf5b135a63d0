//! Redirect-on-login effect.

use std::sync::Arc;

use libris_domain::{AppRoute, NavigateOptions, SessionStatus, paths};
use tokio::sync::watch;
use tracing::debug;

use crate::auth::SessionObserver;
use crate::ports::{Navigator, RouteListener};

/// Forwards a signed-in user away from `/`, `/login` and `/signup`.
///
/// Fires only once the session is settled. Navigation replaces the
/// history entry so the back button does not return to the public page.
pub struct RedirectAfterLogin {
    navigator: Arc<dyn Navigator>,
    status: watch::Receiver<SessionStatus>,
}

impl RedirectAfterLogin {
    /// Creates the effect reading the live session status.
    #[must_use]
    pub const fn new(navigator: Arc<dyn Navigator>, status: watch::Receiver<SessionStatus>) -> Self {
        Self { navigator, status }
    }

    fn fire(&self) {
        if !self.status.borrow().is_signed_in() {
            return;
        }
        let path = self.navigator.current_path();
        if AppRoute::parse(&path).is_public_only() {
            debug!(from = %path, "signed in on a public page");
            self.navigator
                .navigate(paths::DASHBOARD, NavigateOptions::REPLACE);
        }
    }
}

impl SessionObserver for RedirectAfterLogin {
    fn session_changed(&self, _status: SessionStatus) {
        self.fire();
    }
}

impl RouteListener for RedirectAfterLogin {
    fn route_changed(&self, _path: &str) {
        self.fire();
    }
}

impl std::fmt::Debug for RedirectAfterLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedirectAfterLogin").finish_non_exhaustive()
    }
}
