//! Application configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. an optional TOML file (`libris.toml` in the working directory)
//! 3. `LIBRIS_*` environment variables, e.g. `LIBRIS_API_BASE_URL`

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::InfrastructureResult;

/// Default config file name.
pub const CONFIG_FILE: &str = "libris.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "LIBRIS";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3002/api";
const DEFAULT_STARTUP_TIMEOUT_MS: i64 = 10_000;
const DEFAULT_REQUEST_TIMEOUT_MS: i64 = 30_000;

/// Settings for the admin client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Root of the backend REST API.
    pub api_base_url: String,
    /// Upper bound on the silent refresh at startup.
    pub startup_timeout_ms: u64,
    /// Per-request HTTP timeout.
    pub request_timeout_ms: u64,
    /// Path the navigator starts at.
    pub initial_path: String,
}

impl AppConfig {
    /// Loads configuration from `libris.toml` (if present) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load() -> InfrastructureResult<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads configuration from the given file (if present) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: &Path) -> InfrastructureResult<Self> {
        Self::build(path, None)
    }

    fn build(path: &Path, env: Option<HashMap<String, String>>) -> InfrastructureResult<Self> {
        let settings = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("startup_timeout_ms", DEFAULT_STARTUP_TIMEOUT_MS)?
            .set_default("request_timeout_ms", DEFAULT_REQUEST_TIMEOUT_MS)?
            .set_default("initial_path", libris_domain::paths::ROOT)?
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Startup refresh timeout.
    #[must_use]
    pub const fn startup_timeout(&self) -> Duration {
        Duration::from_millis(self.startup_timeout_ms)
    }

    /// HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
