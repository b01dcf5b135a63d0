//! Session controller.
//!
//! The controller is the single source of truth for authentication state
//! and the only component allowed to mutate it. Three operations change
//! the session: [`SessionController::startup`], [`SessionController::login`]
//! and [`SessionController::logout`]. Each one binds the new token on the
//! HTTP client before releasing its lock, then notifies observers.
//!
//! `is_authenticating` starts true and flips to false exactly once, when the
//! startup refresh resolves, fails or times out.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use libris_domain::{AccessToken, AppRoute, NavigateOptions, SessionStatus, paths};
use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::token_store::TokenStore;
use crate::ports::{AuthApi, Clock, Navigator, TokenBinding};

/// How long the startup refresh may take before the session settles as
/// signed out.
pub const DEFAULT_STARTUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Receives every session state change.
///
/// Observers are called synchronously, without any controller lock held,
/// so they may read the controller or navigate from inside the callback.
pub trait SessionObserver: Send + Sync {
    /// Called with the status after a transition.
    fn session_changed(&self, status: SessionStatus);
}

/// How the startup refresh resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupOutcome {
    /// The refresh returned a token; the session is signed in.
    Restored,
    /// The refresh failed or returned no token; the session is signed out.
    Anonymous,
    /// The refresh did not answer within the startup timeout.
    TimedOut,
    /// An explicit login or logout happened while the refresh was in
    /// flight; its result was discarded.
    Superseded,
    /// Startup had already run; nothing was done.
    AlreadyStarted,
}

#[derive(Debug)]
struct Lifecycle {
    authenticating: bool,
    /// Bumped by every explicit login/logout.
    generation: u64,
}

/// Owns the session and mediates all of its transitions.
pub struct SessionController {
    api: Arc<dyn AuthApi>,
    binding: Arc<dyn TokenBinding>,
    navigator: Arc<dyn Navigator>,
    clock: Arc<dyn Clock>,
    tokens: TokenStore,
    lifecycle: Mutex<Lifecycle>,
    status_tx: watch::Sender<SessionStatus>,
    started: AtomicBool,
    observers: RwLock<Vec<Arc<dyn SessionObserver>>>,
    startup_timeout: Duration,
}

impl SessionController {
    /// Creates a controller in the starting state.
    #[must_use]
    pub fn new(
        api: Arc<dyn AuthApi>,
        binding: Arc<dyn TokenBinding>,
        navigator: Arc<dyn Navigator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api,
            binding,
            navigator,
            tokens: TokenStore::new(Arc::clone(&clock)),
            clock,
            lifecycle: Mutex::new(Lifecycle {
                authenticating: true,
                generation: 0,
            }),
            status_tx: watch::channel(SessionStatus::STARTING).0,
            started: AtomicBool::new(false),
            observers: RwLock::new(Vec::new()),
            startup_timeout: DEFAULT_STARTUP_TIMEOUT,
        }
    }

    /// Overrides the startup refresh timeout.
    #[must_use]
    pub const fn with_startup_timeout(mut self, timeout: Duration) -> Self {
        self.startup_timeout = timeout;
        self
    }

    /// Returns the current session status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        *self.status_tx.borrow()
    }

    /// Returns a receiver that always holds the latest status.
    ///
    /// The value is updated before observers run, so reading it from inside
    /// any observer or route listener never yields a stale status.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<SessionStatus> {
        self.status_tx.subscribe()
    }

    /// Returns the in-memory token store.
    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Registers an observer and immediately calls it with the current status.
    pub fn subscribe(&self, observer: Arc<dyn SessionObserver>) {
        self.observers.write().push(Arc::clone(&observer));
        observer.session_changed(self.status());
    }

    /// Attempts to restore the session with a silent refresh.
    ///
    /// Runs at most once per controller; later calls return
    /// [`StartupOutcome::AlreadyStarted`] without touching the backend.
    /// Failures never surface: the session simply settles as signed out.
    pub async fn startup(&self) -> StartupOutcome {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("startup already ran, ignoring");
            return StartupOutcome::AlreadyStarted;
        }

        let generation = self.lifecycle.lock().generation;
        debug!(timeout = ?self.startup_timeout, "attempting silent refresh");

        let (token, mut outcome) =
            match tokio::time::timeout(self.startup_timeout, self.api.refresh()).await {
                Ok(Ok(response)) => match response.access_token.map(AccessToken::new) {
                    Some(Ok(token)) => (Some(token), StartupOutcome::Restored),
                    Some(Err(error)) => {
                        info!(%error, "refresh answered with an unusable token");
                        (None, StartupOutcome::Anonymous)
                    }
                    None => {
                        info!("refresh answered without a token");
                        (None, StartupOutcome::Anonymous)
                    }
                },
                Ok(Err(error)) => {
                    info!(%error, "silent refresh failed, continuing signed out");
                    (None, StartupOutcome::Anonymous)
                }
                Err(_) => {
                    warn!(
                        timeout = ?self.startup_timeout,
                        "silent refresh timed out, continuing signed out"
                    );
                    (None, StartupOutcome::TimedOut)
                }
            };

        let status = {
            let mut lifecycle = self.lifecycle.lock();
            if lifecycle.generation == generation {
                self.commit(token);
            } else {
                debug!("explicit login/logout during startup, keeping it");
                outcome = StartupOutcome::Superseded;
            }
            lifecycle.authenticating = false;
            self.snapshot(&lifecycle)
        };

        info!(
            authenticated = status.is_authenticated,
            outcome = ?outcome,
            "session startup finished"
        );
        self.publish(status);

        if outcome == StartupOutcome::Restored && status.is_authenticated {
            let current = self.navigator.current_path();
            if AppRoute::parse(&current).is_public_only() {
                debug!(from = %current, "restored session on a public page");
                self.navigator.navigate(paths::DASHBOARD, NavigateOptions::PUSH);
            }
        }

        outcome
    }

    /// Signs in with a token obtained from an explicit login.
    ///
    /// Does not navigate; the caller decides where to go next.
    pub fn login(&self, token: AccessToken) {
        let status = {
            let mut lifecycle = self.lifecycle.lock();
            lifecycle.generation += 1;
            self.commit(Some(token));
            self.snapshot(&lifecycle)
        };
        info!("session signed in");
        self.publish(status);
    }

    /// Signs out locally. Never calls the backend.
    pub fn logout(&self) {
        let (status, previous) = {
            let mut lifecycle = self.lifecycle.lock();
            lifecycle.generation += 1;
            let previous = self.tokens.stored();
            self.commit(None);
            (self.snapshot(&lifecycle), previous)
        };
        match previous {
            Some(stored) => info!(
                held_for_secs = self.clock.since(stored.acquired_at).num_seconds(),
                "session signed out"
            ),
            None => debug!("logout on a signed-out session"),
        }
        self.publish(status);
    }

    /// Applies a token change. Caller must hold the lifecycle lock.
    fn commit(&self, token: Option<AccessToken>) {
        self.binding.bind(token.as_ref());
        match token {
            Some(token) => self.tokens.set(token),
            None => {
                self.tokens.clear();
            }
        }
    }

    /// Computes and records the status. Caller must hold the lifecycle lock.
    fn snapshot(&self, lifecycle: &Lifecycle) -> SessionStatus {
        let status = SessionStatus {
            is_authenticated: self.tokens.is_logged_in(),
            is_authenticating: lifecycle.authenticating,
        };
        self.status_tx.send_replace(status);
        status
    }

    fn publish(&self, status: SessionStatus) {
        let observers = self.observers.read().clone();
        for observer in observers {
            observer.session_changed(status);
        }
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("status", &self.status())
            .field("startup_timeout", &self.startup_timeout)
            .finish_non_exhaustive()
    }
}
