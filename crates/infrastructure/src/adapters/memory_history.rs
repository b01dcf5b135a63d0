//! In-memory navigation history.

use std::sync::Arc;

use libris_application::ports::{Navigator, RouteListener};
use libris_domain::NavigateOptions;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

#[derive(Debug)]
struct Stack {
    entries: Vec<String>,
    index: usize,
}

impl Stack {
    fn current(&self) -> &str {
        &self.entries[self.index]
    }
}

/// Browser-like history stack implementing the `Navigator` port.
///
/// `push` drops any forward entries, `replace` overwrites the current one.
/// Listeners run after the stack is updated and without any lock held.
pub struct MemoryHistory {
    stack: Mutex<Stack>,
    listeners: RwLock<Vec<Arc<dyn RouteListener>>>,
}

impl MemoryHistory {
    /// Creates a history positioned at `initial_path`.
    #[must_use]
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            stack: Mutex::new(Stack {
                entries: vec![initial_path.into()],
                index: 0,
            }),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Moves one entry back. Returns false when already at the first entry.
    pub fn back(&self) -> bool {
        let path = {
            let mut stack = self.stack.lock();
            if stack.index == 0 {
                return false;
            }
            stack.index -= 1;
            stack.current().to_string()
        };
        debug!(path = %path, "history back");
        self.notify(&path);
        true
    }

    /// Returns every entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.stack.lock().entries.clone()
    }

    fn notify(&self, path: &str) {
        let listeners = self.listeners.read().clone();
        for listener in listeners {
            listener.route_changed(path);
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(libris_domain::paths::ROOT)
    }
}

impl Navigator for MemoryHistory {
    fn current_path(&self) -> String {
        self.stack.lock().current().to_string()
    }

    fn navigate(&self, path: &str, options: NavigateOptions) {
        {
            let mut stack = self.stack.lock();
            if options.replace {
                let index = stack.index;
                stack.entries[index] = path.to_string();
            } else {
                let next = stack.index + 1;
                stack.entries.truncate(next);
                stack.entries.push(path.to_string());
                stack.index = next;
            }
        }
        debug!(path, replace = options.replace, "navigated");
        self.notify(path);
    }

    fn listen(&self, listener: Arc<dyn RouteListener>) {
        self.listeners.write().push(listener);
    }
}

impl std::fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("stack", &*self.stack.lock())
            .field("listeners", &self.listeners.read().len())
            .finish()
    }
}
