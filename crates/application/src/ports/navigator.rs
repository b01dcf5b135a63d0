//! Navigation port.

use std::sync::Arc;

use libris_domain::NavigateOptions;

/// Receives a callback after every route change.
pub trait RouteListener: Send + Sync {
    /// Called with the new current path.
    fn route_changed(&self, path: &str);
}

/// The client-side router.
///
/// Implementations must not hold internal locks while calling listeners:
/// a listener may navigate again from inside the callback.
pub trait Navigator: Send + Sync {
    /// Returns the current path.
    fn current_path(&self) -> String;

    /// Navigates to `path`, then notifies every listener.
    fn navigate(&self, path: &str, options: NavigateOptions);

    /// Registers a route listener.
    fn listen(&self, listener: Arc<dyn RouteListener>);
}
