//! Route guard for the protected dashboard area.

use std::sync::Arc;

use libris_domain::{AppRoute, GuardDecision, NavigateOptions, SessionStatus, paths};
use tokio::sync::watch;
use tracing::debug;

use crate::auth::SessionObserver;
use crate::ports::{Navigator, RouteListener};

/// Gates access to every path under `/dashboard`.
///
/// While the session is authenticating the guard answers
/// [`GuardDecision::Pending`] and never redirects. Once settled, a
/// signed-out user on a protected path is sent to `/login`, replacing
/// the history entry. A signed-out user on `/` is sent to `/login` too.
pub struct RouteGuard {
    navigator: Arc<dyn Navigator>,
    status: watch::Receiver<SessionStatus>,
}

impl RouteGuard {
    /// Creates a guard reading the live session status.
    #[must_use]
    pub const fn new(navigator: Arc<dyn Navigator>, status: watch::Receiver<SessionStatus>) -> Self {
        Self { navigator, status }
    }

    /// The guard contract for protected views.
    #[must_use]
    pub fn decide(status: SessionStatus) -> GuardDecision {
        GuardDecision::evaluate(status)
    }

    /// Decision for rendering `path` right now. Unprotected paths are
    /// always allowed.
    #[must_use]
    pub fn decision_for(&self, path: &str) -> GuardDecision {
        if AppRoute::parse(path).is_protected() {
            Self::decide(*self.status.borrow())
        } else {
            GuardDecision::Allow
        }
    }

    /// Decision for the router's current path.
    #[must_use]
    pub fn current_decision(&self) -> GuardDecision {
        self.decision_for(&self.navigator.current_path())
    }

    fn enforce(&self) {
        let status = *self.status.borrow();
        let path = self.navigator.current_path();
        let route = AppRoute::parse(&path);

        let redirect = if route.is_protected() {
            Self::decide(status).redirect_target().map(str::to_string)
        } else if route == AppRoute::Root && status.is_signed_out() {
            Some(paths::LOGIN.to_string())
        } else {
            None
        };

        if let Some(target) = redirect {
            debug!(from = %path, to = %target, "route guard redirect");
            self.navigator.navigate(&target, NavigateOptions::REPLACE);
        }
    }
}

impl SessionObserver for RouteGuard {
    fn session_changed(&self, _status: SessionStatus) {
        self.enforce();
    }
}

impl RouteListener for RouteGuard {
    fn route_changed(&self, _path: &str) {
        self.enforce();
    }
}

impl std::fmt::Debug for RouteGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteGuard")
            .field("status", &*self.status.borrow())
            .finish_non_exhaustive()
    }
}
