//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the session core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod auth_api;
mod clock;
mod navigator;
mod notifier;
mod token_binding;

pub use auth_api::{AuthApi, AuthApiError};
pub use clock::Clock;
pub use navigator::{Navigator, RouteListener};
pub use notifier::{Notification, NotificationLevel, Notifier};
pub use token_binding::TokenBinding;
