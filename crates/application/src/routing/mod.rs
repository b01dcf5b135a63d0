//! Session-driven route gating.
//!
//! Two consumers react to session and route changes:
//! - [`RouteGuard`] keeps signed-out users out of the dashboard
//! - [`RedirectAfterLogin`] bounces signed-in users off public-only pages
//!
//! Both subscribe to the [`SessionController`] and listen on the
//! [`Navigator`], so they re-evaluate on every change of either.

mod guard;
mod redirect;

use std::sync::Arc;

pub use guard::RouteGuard;
pub use redirect::RedirectAfterLogin;

use crate::auth::SessionController;
use crate::ports::Navigator;

/// The installed guard and redirect effect.
#[derive(Debug, Clone)]
pub struct RouteGate {
    /// The route guard.
    pub guard: Arc<RouteGuard>,
    /// The redirect-on-login effect.
    pub redirect: Arc<RedirectAfterLogin>,
}

impl RouteGate {
    /// Creates both consumers and wires them to the session and router.
    ///
    /// Each consumer evaluates once immediately against the current state.
    #[must_use]
    pub fn install(session: &SessionController, navigator: &Arc<dyn Navigator>) -> Self {
        let guard = Arc::new(RouteGuard::new(Arc::clone(navigator), session.watch()));
        let redirect = Arc::new(RedirectAfterLogin::new(
            Arc::clone(navigator),
            session.watch(),
        ));

        navigator.listen(guard.clone());
        navigator.listen(redirect.clone());
        session.subscribe(guard.clone());
        session.subscribe(redirect.clone());

        Self { guard, redirect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        FakeAuthApi, FixedClock, RecordingBinding, RecordingNavigator, refresh_ok,
    };
    use libris_domain::{AccessToken, GuardDecision, NavigateOptions, SessionStatus};
    use pretty_assertions::assert_eq;

    fn setup(
        api: FakeAuthApi,
        path: &str,
    ) -> (Arc<SessionController>, Arc<RecordingNavigator>, RouteGate) {
        let navigator = Arc::new(RecordingNavigator::at(path));
        let dyn_navigator: Arc<dyn Navigator> = navigator.clone();
        let session = Arc::new(SessionController::new(
            Arc::new(api),
            Arc::new(RecordingBinding::default()),
            dyn_navigator.clone(),
            Arc::new(FixedClock::default()),
        ));
        let gate = RouteGate::install(&session, &dyn_navigator);
        (session, navigator, gate)
    }

    #[tokio::test]
    async fn test_valid_credential_on_root_lands_on_dashboard() {
        let (session, navigator, gate) = setup(FakeAuthApi::respond(refresh_ok("tok")), "/");
        assert!(gate.guard.current_decision().is_allowed());
        assert!(navigator.navigations().is_empty());

        session.startup().await;

        assert_eq!(session.status(), SessionStatus::AUTHENTICATED);
        assert_eq!(navigator.current_path(), "/dashboard");
        assert_eq!(
            navigator.navigations(),
            vec![("/dashboard".to_string(), NavigateOptions::REPLACE)]
        );
    }

    #[tokio::test]
    async fn test_no_credential_on_dashboard_is_sent_to_login() {
        let (session, navigator, gate) = setup(
            FakeAuthApi::respond(Err(crate::ports::AuthApiError::Status {
                status: 401,
                message: "no refresh token".to_string(),
            })),
            "/dashboard",
        );
        // no premature redirect while the refresh is outstanding
        assert_eq!(gate.guard.current_decision(), GuardDecision::Pending);
        assert!(navigator.navigations().is_empty());

        session.startup().await;

        assert_eq!(session.status(), SessionStatus::ANONYMOUS);
        assert_eq!(
            gate.guard.decision_for("/dashboard"),
            GuardDecision::Deny {
                redirect_to: "/login".to_string()
            }
        );
        assert_eq!(navigator.current_path(), "/login");
        assert_eq!(
            navigator.navigations(),
            vec![("/login".to_string(), NavigateOptions::REPLACE)]
        );
    }

    #[tokio::test]
    async fn test_logout_then_navigating_to_dashboard_is_denied() {
        let (session, navigator, gate) =
            setup(FakeAuthApi::respond(refresh_ok("tok")), "/dashboard/books");
        session.startup().await;
        assert!(gate.guard.current_decision().is_allowed());

        session.logout();

        assert_eq!(navigator.current_path(), "/login");
        navigator.navigate("/dashboard/readers", NavigateOptions::PUSH);
        assert_eq!(navigator.current_path(), "/login");
    }

    #[tokio::test]
    async fn test_explicit_login_on_login_page_redirects() {
        let (session, navigator, _gate) = setup(
            FakeAuthApi::respond(Err(crate::ports::AuthApiError::Network(
                "offline".to_string(),
            ))),
            "/login",
        );
        session.startup().await;
        assert_eq!(navigator.current_path(), "/login");

        session.login(AccessToken::new("abc123").unwrap());

        assert_eq!(navigator.current_path(), "/dashboard");
    }

    #[tokio::test]
    async fn test_signed_out_root_resolves_to_login() {
        let (session, navigator, _gate) = setup(
            FakeAuthApi::respond(Err(crate::ports::AuthApiError::Timeout)),
            "/",
        );
        session.startup().await;
        assert_eq!(navigator.current_path(), "/login");
    }
}
