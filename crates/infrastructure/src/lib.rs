//! Libris Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod error;
pub mod settings;

pub use adapters::{
    DEFAULT_REQUEST_TIMEOUT, MemoryHistory, ReqwestApiClient, ReqwestAuthApi, SystemClock,
    TracingNotifier,
};
pub use error::{InfrastructureError, InfrastructureResult};
pub use settings::AppConfig;
