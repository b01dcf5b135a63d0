//! In-memory access token storage.
//!
//! The store holds at most one token. It is never persisted: a reload
//! starts empty and relies on the startup refresh.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use libris_domain::AccessToken;
use parking_lot::RwLock;

use crate::ports::Clock;

/// A stored token together with the time it was acquired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredToken {
    /// The access token.
    pub token: AccessToken,
    /// When the token was stored.
    pub acquired_at: DateTime<Utc>,
}

/// Thread-safe in-memory token store.
pub struct TokenStore {
    slot: RwLock<Option<StoredToken>>,
    clock: Arc<dyn Clock>,
}

impl TokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: RwLock::new(None),
            clock,
        }
    }

    /// Stores a token, replacing any previous one.
    pub fn set(&self, token: AccessToken) {
        let acquired_at = self.clock.now();
        *self.slot.write() = Some(StoredToken { token, acquired_at });
    }

    /// Returns the current token, if any.
    #[must_use]
    pub fn get(&self) -> Option<AccessToken> {
        self.slot.read().as_ref().map(|stored| stored.token.clone())
    }

    /// Returns the current token with its acquisition time.
    #[must_use]
    pub fn stored(&self) -> Option<StoredToken> {
        self.slot.read().clone()
    }

    /// Removes the current token, returning it.
    pub fn clear(&self) -> Option<StoredToken> {
        self.slot.write().take()
    }

    /// Derived login flag: true iff a token is held.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.slot.read().is_some()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("slot", &*self.slot.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedClock;
    use pretty_assertions::assert_eq;

    fn store() -> TokenStore {
        TokenStore::new(Arc::new(FixedClock::default()))
    }

    #[test]
    fn test_starts_empty() {
        let store = store();
        assert!(!store.is_logged_in());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_set_and_get() {
        let store = store();
        let token = AccessToken::new("abc123").unwrap();
        store.set(token.clone());

        assert!(store.is_logged_in());
        assert_eq!(store.get(), Some(token));
        assert_eq!(
            store.stored().map(|s| s.acquired_at),
            Some(FixedClock::default().now())
        );
    }

    #[test]
    fn test_set_replaces_previous_token() {
        let store = store();
        store.set(AccessToken::new("first").unwrap());
        store.set(AccessToken::new("second").unwrap());
        assert_eq!(store.get().map(|t| t.as_str().to_string()), Some("second".to_string()));
    }

    #[test]
    fn test_clear() {
        let store = store();
        store.set(AccessToken::new("abc123").unwrap());

        let removed = store.clear();
        assert_eq!(removed.map(|s| s.token.as_str().to_string()), Some("abc123".to_string()));
        assert!(!store.is_logged_in());
        assert!(store.clear().is_none());
    }
}
