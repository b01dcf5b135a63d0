//! Transient user notifications ("toasts").

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Something succeeded.
    Success,
    /// Something failed.
    Error,
}

/// A short message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Message text.
    pub message: String,
}

impl Notification {
    /// Creates a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// Creates an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Port for showing notifications.
pub trait Notifier: Send + Sync {
    /// Shows a notification.
    fn notify(&self, notification: Notification);
}
