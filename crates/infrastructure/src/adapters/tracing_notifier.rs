//! Notifier that writes notifications to the log.

use libris_application::ports::{Notification, NotificationLevel, Notifier};
use tracing::{info, warn};

/// Headless stand-in for toast notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates a new notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => info!(message = %notification.message, "notification"),
            NotificationLevel::Error => warn!(message = %notification.message, "notification"),
        }
    }
}
