//! Session status types for UI binding.
//!
//! A [`SessionStatus`] is the snapshot every session consumer reads. The
//! route guard turns it into a [`GuardDecision`].

use serde::{Deserialize, Serialize};

use crate::route::paths;

/// Snapshot of the session as seen by the rest of the application.
///
/// - authenticating: the startup refresh has not resolved yet
/// - authenticated: a non-empty access token is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    /// True iff an access token is held.
    pub is_authenticated: bool,
    /// True only while the startup refresh is outstanding.
    pub is_authenticating: bool,
}

impl SessionStatus {
    /// Status of a freshly constructed session.
    pub const STARTING: Self = Self {
        is_authenticated: false,
        is_authenticating: true,
    };

    /// Settled, signed-out status.
    pub const ANONYMOUS: Self = Self {
        is_authenticated: false,
        is_authenticating: false,
    };

    /// Settled, signed-in status.
    pub const AUTHENTICATED: Self = Self {
        is_authenticated: true,
        is_authenticating: false,
    };

    /// Returns true once the startup refresh has resolved.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !self.is_authenticating
    }

    /// Returns true if the session is settled and signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.is_settled() && self.is_authenticated
    }

    /// Returns true if the session is settled and signed out.
    #[must_use]
    pub const fn is_signed_out(&self) -> bool {
        self.is_settled() && !self.is_authenticated
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::STARTING
    }
}

/// Outcome of evaluating the route guard against a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Credentials are still being resolved; render a neutral state.
    Pending,
    /// Render the protected subtree.
    Allow,
    /// Access denied; redirect to the given path.
    Deny {
        /// Where the user is sent.
        redirect_to: String,
    },
}

impl GuardDecision {
    /// Evaluates the guard for a session status.
    ///
    /// `Pending` wins over everything else while authenticating.
    #[must_use]
    pub fn evaluate(status: SessionStatus) -> Self {
        if status.is_authenticating {
            Self::Pending
        } else if !status.is_authenticated {
            Self::Deny {
                redirect_to: paths::LOGIN.to_string(),
            }
        } else {
            Self::Allow
        }
    }

    /// Returns true for `Pending`.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true for `Allow`.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the redirect target for `Deny`.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Deny { redirect_to } => Some(redirect_to),
            _ => None,
        }
    }
}
