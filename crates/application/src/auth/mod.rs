//! Authentication module for the Libris admin client.
//!
//! This module provides:
//! - In-memory access token storage
//! - The session controller owning login, logout and startup refresh

mod session;
mod token_store;

pub use session::{DEFAULT_STARTUP_TIMEOUT, SessionController, SessionObserver, StartupOutcome};
pub use token_store::{StoredToken, TokenStore};
