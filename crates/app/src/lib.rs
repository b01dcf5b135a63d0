//! Libris - composition root
//!
//! Wires the concrete adapters into the session core. Exactly one
//! [`AppShell`] exists per process; everything that needs the session gets
//! it from here rather than from a global.

use std::sync::Arc;

use libris_application::ports::{AuthApi, Navigator, Notifier};
use libris_application::use_cases::{LoginUser, LogoutUser, ProfileService, SignUpUser};
use libris_application::{RouteGate, SessionController, StartupOutcome};
use libris_domain::{GuardDecision, NavigateOptions, SessionStatus};
use libris_infrastructure::{
    AppConfig, InfrastructureResult, MemoryHistory, ReqwestApiClient, ReqwestAuthApi,
    SystemClock, TracingNotifier,
};
use tracing::info;

/// The running admin client.
pub struct AppShell {
    config: AppConfig,
    client: Arc<ReqwestApiClient>,
    api: Arc<dyn AuthApi>,
    history: Arc<MemoryHistory>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    session: Arc<SessionController>,
    gate: RouteGate,
}

impl AppShell {
    /// Builds the shell with log-backed notifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the API base URL is invalid or the HTTP client
    /// cannot be created.
    pub fn build(config: AppConfig) -> InfrastructureResult<Self> {
        Self::with_notifier(config, Arc::new(TracingNotifier::new()))
    }

    /// Builds the shell with a custom notifier.
    ///
    /// # Errors
    ///
    /// Same as [`AppShell::build`].
    pub fn with_notifier(
        config: AppConfig,
        notifier: Arc<dyn Notifier>,
    ) -> InfrastructureResult<Self> {
        let client = Arc::new(ReqwestApiClient::new(
            &config.api_base_url,
            config.request_timeout(),
        )?);
        let api: Arc<dyn AuthApi> = Arc::new(ReqwestAuthApi::new(Arc::clone(&client)));
        let history = Arc::new(MemoryHistory::new(config.initial_path.clone()));
        let navigator: Arc<dyn Navigator> = history.clone();

        let session = Arc::new(
            SessionController::new(
                Arc::clone(&api),
                client.clone(),
                Arc::clone(&navigator),
                Arc::new(SystemClock::new()),
            )
            .with_startup_timeout(config.startup_timeout()),
        );
        let gate = RouteGate::install(&session, &navigator);

        info!(api = %client.base_url(), path = %config.initial_path, "application shell ready");

        Ok(Self {
            config,
            client,
            api,
            history,
            navigator,
            notifier,
            session,
            gate,
        })
    }

    /// Runs the silent refresh. Call once after building.
    pub async fn start(&self) -> StartupOutcome {
        let outcome = self.session.startup().await;
        info!(?outcome, status = ?self.session.status(), path = %self.history.current_path(), "startup finished");
        outcome
    }

    /// Navigates as if the user followed a link.
    pub fn open(&self, path: &str) {
        self.navigator.navigate(path, NavigateOptions::PUSH);
    }

    /// Returns the current session status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    /// Returns what the route guard decides for the current path.
    #[must_use]
    pub fn decision(&self) -> GuardDecision {
        self.gate.guard.current_decision()
    }

    /// Returns the current path.
    #[must_use]
    pub fn current_path(&self) -> String {
        self.history.current_path()
    }

    /// Returns the session controller.
    #[must_use]
    pub const fn session(&self) -> &Arc<SessionController> {
        &self.session
    }

    /// Returns the navigation history.
    #[must_use]
    pub const fn history(&self) -> &Arc<MemoryHistory> {
        &self.history
    }

    /// Returns the HTTP client binding.
    #[must_use]
    pub fn client(&self) -> &ReqwestApiClient {
        &self.client
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Login form action.
    #[must_use]
    pub fn login_user(&self) -> LoginUser {
        LoginUser::new(
            Arc::clone(&self.api),
            Arc::clone(&self.session),
            Arc::clone(&self.navigator),
            Arc::clone(&self.notifier),
        )
    }

    /// Logout button action.
    #[must_use]
    pub fn logout_user(&self) -> LogoutUser {
        LogoutUser::new(
            Arc::clone(&self.session),
            Arc::clone(&self.navigator),
            Arc::clone(&self.notifier),
        )
    }

    /// Sign-up form action.
    #[must_use]
    pub fn sign_up_user(&self) -> SignUpUser {
        SignUpUser::new(Arc::clone(&self.api), Arc::clone(&self.notifier))
    }

    /// Profile page actions.
    #[must_use]
    pub fn profile(&self) -> ProfileService {
        ProfileService::new(Arc::clone(&self.api), Arc::clone(&self.session))
    }
}

impl std::fmt::Debug for AppShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppShell")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}
