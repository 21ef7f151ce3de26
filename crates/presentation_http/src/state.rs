//! Application state shared across handlers

use std::{sync::Arc, time::Duration};

use application::{
    ApplicationError, ReadingSource, TemperatureService, WeatherComposer, WeatherService,
    WindSpeedService,
};
use domain::{Temperature, WindSpeed};
use infrastructure::{AppConfig, TemperatureAdapter, WindSpeedAdapter};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Range service over the temperature provider
    pub temperature: Arc<TemperatureService>,
    /// Range service over the wind speed provider
    pub wind_speed: Arc<WindSpeedService>,
    /// Range service over weather composed from both providers
    pub weather: Arc<WeatherService>,
    /// Deadline for a whole range request
    pub request_timeout: Duration,
}

impl AppState {
    /// Wire the services on top of the given reading sources
    ///
    /// The weather service shares both sources with the single-provider
    /// services.
    pub fn new(
        temperature: Arc<dyn ReadingSource<Temperature>>,
        wind_speed: Arc<dyn ReadingSource<WindSpeed>>,
        request_timeout: Duration,
    ) -> Self {
        let composer = WeatherComposer::new(Arc::clone(&temperature), Arc::clone(&wind_speed));

        Self {
            temperature: Arc::new(TemperatureService::new(temperature)),
            wind_speed: Arc::new(WindSpeedService::new(wind_speed)),
            weather: Arc::new(WeatherService::new(Arc::new(composer))),
            request_timeout,
        }
    }

    /// Build the state against the HTTP providers named in the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a provider client fails to initialize.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let temperature = TemperatureAdapter::new(&config.providers.temperature)?;
        let wind_speed = WindSpeedAdapter::new(&config.providers.wind_speed)?;

        Ok(Self::new(
            Arc::new(temperature),
            Arc::new(wind_speed),
            config.server.request_timeout(),
        ))
    }
}
