//! Libris Application - Session lifecycle and route gating
//!
//! This crate owns the authentication state of the admin client and the
//! logic that reacts to it. It talks to the outside world only through
//! the traits in [`ports`].

pub mod auth;
pub mod error;
pub mod ports;
pub mod routing;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{SessionController, SessionObserver, StartupOutcome, TokenStore};
pub use error::{ApplicationError, ApplicationResult};
pub use routing::{RedirectAfterLogin, RouteGate, RouteGuard};
