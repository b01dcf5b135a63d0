//! Wall-clock adapter for the `Clock` port.

use chrono::{DateTime, Utc};
use libris_application::ports::Clock;

/// `Clock` reading `Utc::now()`; stamps tokens with their acquisition time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates the clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_since_past_instant_is_positive() {
        let clock = SystemClock::new();
        let acquired = clock.now() - TimeDelta::minutes(5);
        assert!(clock.since(acquired) >= TimeDelta::minutes(5));
    }

    #[test]
    fn test_since_future_instant_is_zero() {
        let clock = SystemClock::new();
        let acquired = clock.now() + TimeDelta::hours(1);
        assert_eq!(clock.since(acquired), TimeDelta::zero());
    }
}
