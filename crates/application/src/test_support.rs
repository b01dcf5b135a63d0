//! In-memory fakes for the ports, shared by unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use libris_domain::{
    AccessToken, LoginRequest, LoginResponse, NavigateOptions, PasswordChange, ProfileUpdate,
    RefreshResponse, SessionStatus, SignUpRequest, SignUpResponse, UserProfile,
};
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::auth::SessionObserver;
use crate::ports::{
    AuthApi, AuthApiError, Clock, Navigator, Notification, Notifier, RouteListener, TokenBinding,
};

/// Clock frozen at 2024-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub type RefreshResult = Result<RefreshResponse, AuthApiError>;

/// How the fake backend answers `POST /auth/refresh-token`.
pub enum RefreshBehavior {
    Respond(RefreshResult),
    Hang,
    Gated(Option<oneshot::Receiver<RefreshResult>>),
}

pub fn refresh_ok(token: &str) -> RefreshResult {
    Ok(RefreshResponse {
        access_token: Some(token.to_string()),
    })
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: "64f0".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@bookclub.lk".to_string(),
        role: "librarian".to_string(),
    }
}

pub struct FakeAuthApi {
    refresh: Mutex<RefreshBehavior>,
    login: Mutex<Result<LoginResponse, AuthApiError>>,
    sign_up: Mutex<Result<SignUpResponse, AuthApiError>>,
    profile: Mutex<Result<UserProfile, AuthApiError>>,
    pub refresh_calls: AtomicUsize,
    pub login_calls: AtomicUsize,
    pub sign_up_calls: AtomicUsize,
    pub last_update: Mutex<Option<ProfileUpdate>>,
    pub last_password_change: Mutex<Option<PasswordChange>>,
}

impl FakeAuthApi {
    pub fn new(refresh: RefreshBehavior) -> Self {
        Self {
            refresh: Mutex::new(refresh),
            login: Mutex::new(Ok(LoginResponse {
                access_token: "login-token".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@bookclub.lk".to_string(),
                id: "64f0".to_string(),
            })),
            sign_up: Mutex::new(Ok(SignUpResponse {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@bookclub.lk".to_string(),
                role: "librarian".to_string(),
                id: "64f0".to_string(),
            })),
            profile: Mutex::new(Ok(sample_profile())),
            refresh_calls: AtomicUsize::new(0),
            login_calls: AtomicUsize::new(0),
            sign_up_calls: AtomicUsize::new(0),
            last_update: Mutex::new(None),
            last_password_change: Mutex::new(None),
        }
    }

    pub fn respond(result: RefreshResult) -> Self {
        Self::new(RefreshBehavior::Respond(result))
    }

    pub fn gated() -> (Self, oneshot::Sender<RefreshResult>) {
        let (tx, rx) = oneshot::channel();
        (Self::new(RefreshBehavior::Gated(Some(rx))), tx)
    }

    pub fn with_login(self, result: Result<LoginResponse, AuthApiError>) -> Self {
        *self.login.lock() = result;
        self
    }

    pub fn with_sign_up(self, result: Result<SignUpResponse, AuthApiError>) -> Self {
        *self.sign_up.lock() = result;
        self
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn refresh(&self) -> RefreshResult {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        let gate = {
            let mut behavior = self.refresh.lock();
            match &mut *behavior {
                RefreshBehavior::Respond(result) => return result.clone(),
                RefreshBehavior::Hang => None,
                RefreshBehavior::Gated(rx) => rx.take(),
            }
        };
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(AuthApiError::Network("gate dropped".to_string()))),
            None => std::future::pending().await,
        }
    }

    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, AuthApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login.lock().clone()
    }

    async fn sign_up(&self, _request: &SignUpRequest) -> Result<SignUpResponse, AuthApiError> {
        self.sign_up_calls.fetch_add(1, Ordering::SeqCst);
        self.sign_up.lock().clone()
    }

    async fn get_profile(&self) -> Result<UserProfile, AuthApiError> {
        self.profile.lock().clone()
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, AuthApiError> {
        *self.last_update.lock() = Some(update.clone());
        let mut profile = self.profile.lock().clone()?;
        if let Some(first_name) = &update.first_name {
            profile.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &update.last_name {
            profile.last_name.clone_from(last_name);
        }
        if let Some(email) = &update.email {
            profile.email.clone_from(email);
        }
        Ok(profile)
    }

    async fn change_password(&self, change: &PasswordChange) -> Result<(), AuthApiError> {
        *self.last_password_change.lock() = Some(change.clone());
        Ok(())
    }
}

/// Records every binding change; `current()` is what the next request would carry.
#[derive(Default)]
pub struct RecordingBinding {
    pub history: Mutex<Vec<Option<String>>>,
}

impl RecordingBinding {
    pub fn current(&self) -> Option<String> {
        self.history.lock().last().cloned().flatten()
    }
}

impl TokenBinding for RecordingBinding {
    fn bind(&self, token: Option<&AccessToken>) {
        self.history.lock().push(token.map(AccessToken::bearer));
    }
}

/// Router fake with real listener dispatch.
pub struct RecordingNavigator {
    path: Mutex<String>,
    pub navigations: Mutex<Vec<(String, NavigateOptions)>>,
    listeners: Mutex<Vec<Arc<dyn RouteListener>>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: Mutex::new(path.to_string()),
            navigations: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn navigations(&self) -> Vec<(String, NavigateOptions)> {
        self.navigations.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.lock().clone()
    }

    fn navigate(&self, path: &str, options: NavigateOptions) {
        *self.path.lock() = path.to_string();
        self.navigations.lock().push((path.to_string(), options));
        let listeners = self.listeners.lock().clone();
        for listener in listeners {
            listener.route_changed(path);
        }
    }

    fn listen(&self, listener: Arc<dyn RouteListener>) {
        self.listeners.lock().push(listener);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    pub statuses: Mutex<Vec<SessionStatus>>,
}

impl SessionObserver for RecordingObserver {
    fn session_changed(&self, status: SessionStatus) {
        self.statuses.lock().push(status);
    }
}
