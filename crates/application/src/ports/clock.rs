//! Clock port

use chrono::{DateTime, TimeDelta, Utc};

/// Source of wall-clock time.
///
/// The token store stamps every stored token with the time it was
/// acquired; tests substitute a fixed clock.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Time elapsed since `earlier`, clamped at zero.
    fn since(&self, earlier: DateTime<Utc>) -> TimeDelta {
        (self.now() - earlier).max(TimeDelta::zero())
    }
}
