//! Upstream provider endpoints.

use integration_provider::ProviderConfig;
use serde::{Deserialize, Serialize};

/// Endpoints of both upstream providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Temperature provider
    #[serde(default = "default_temperature")]
    pub temperature: ProviderConfig,

    /// Wind speed provider
    #[serde(default = "default_wind_speed")]
    pub wind_speed: ProviderConfig,
}

fn default_temperature() -> ProviderConfig {
    ProviderConfig::with_base_url("http://localhost:8000/")
}

fn default_wind_speed() -> ProviderConfig {
    ProviderConfig::with_base_url("http://localhost:8080/")
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            wind_speed: default_wind_speed(),
        }
    }
}
