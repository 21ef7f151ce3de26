//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings and the per-request deadline
//! - `providers`: upstream temperature and wind speed endpoints

mod providers;
mod server;

use serde::{Deserialize, Serialize};

pub use providers::ProvidersConfig;
pub use server::ServerConfig;

use crate::telemetry::TelemetryConfig;

/// Prefix of environment variables overriding configuration values
pub const ENV_PREFIX: &str = "SKYFOLD";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream provider configuration
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Sources, later ones winning: built-in defaults, `config.toml` in the
    /// working directory, `SKYFOLD_*` environment variables
    /// (e.g. `SKYFOLD_SERVER__PORT`, `SKYFOLD_PROVIDERS__TEMPERATURE__BASE_URL`).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Self::environment())
    }

    /// Environment source with the variable naming used by [`AppConfig::load`]
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration using the given environment source
    pub fn load_from(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.request_timeout_secs", 10)?
            .set_default("providers.temperature.base_url", "http://localhost:8000/")?
            .set_default("providers.wind_speed.base_url", "http://localhost:8080/")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            .add_source(environment);

        builder.build()?.try_deserialize()
    }
}
