//! Port adapters.

mod memory_history;
mod reqwest_auth_api;
mod reqwest_client;
mod system_clock;
mod tracing_notifier;

pub use memory_history::MemoryHistory;
pub use reqwest_auth_api::ReqwestAuthApi;
pub use reqwest_client::{DEFAULT_REQUEST_TIMEOUT, ReqwestApiClient};
pub use system_clock::SystemClock;
pub use tracing_notifier::TracingNotifier;
