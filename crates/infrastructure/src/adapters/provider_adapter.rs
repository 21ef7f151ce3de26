//! Provider adapters - Implement `ReadingSource` using integration_provider

use application::error::ApplicationError;
use application::ports::ReadingSource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{Temperature, WindSpeed};
use integration_provider::{
    ProviderClient, ProviderConfig, ProviderError, TemperaturePayload, WindSpeedPayload,
};
use tracing::instrument;

/// Provider name of the temperature adapter
pub const TEMPERATURE_PROVIDER: &str = "temperature";

/// Provider name of the wind speed adapter
pub const WIND_SPEED_PROVIDER: &str = "wind_speed";

/// Map provider client error to application error
fn map_error(err: ProviderError) -> ApplicationError {
    match err {
        ProviderError::ConnectionFailed(e)
        | ProviderError::RequestFailed(e)
        | ProviderError::ServiceUnavailable(e) => ApplicationError::UpstreamUnavailable(e),
        ProviderError::ParseError(e) => ApplicationError::DecodeFailure(e),
    }
}

fn build_client(config: &ProviderConfig) -> Result<ProviderClient, ApplicationError> {
    ProviderClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))
}

/// Adapter for the temperature provider
#[derive(Debug, Clone)]
pub struct TemperatureAdapter {
    client: ProviderClient,
}

impl TemperatureAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &ProviderConfig) -> Result<Self, ApplicationError> {
        Ok(Self {
            client: build_client(config)?,
        })
    }
}

#[async_trait]
impl ReadingSource<Temperature> for TemperatureAdapter {
    fn provider(&self) -> &'static str {
        TEMPERATURE_PROVIDER
    }

    #[instrument(skip(self))]
    async fn reading_at(&self, at: DateTime<Utc>) -> Result<Option<Temperature>, ApplicationError> {
        let payload = self
            .client
            .fetch_at::<TemperaturePayload>(at)
            .await
            .map_err(map_error)?;

        Ok(payload.map(|p| Temperature::new(p.date, p.temp)))
    }

    async fn is_healthy(&self) -> bool {
        self.client.is_healthy().await
    }
}

/// Adapter for the wind speed provider
#[derive(Debug, Clone)]
pub struct WindSpeedAdapter {
    client: ProviderClient,
}

impl WindSpeedAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &ProviderConfig) -> Result<Self, ApplicationError> {
        Ok(Self {
            client: build_client(config)?,
        })
    }
}

#[async_trait]
impl ReadingSource<WindSpeed> for WindSpeedAdapter {
    fn provider(&self) -> &'static str {
        WIND_SPEED_PROVIDER
    }

    #[instrument(skip(self))]
    async fn reading_at(&self, at: DateTime<Utc>) -> Result<Option<WindSpeed>, ApplicationError> {
        let payload = self
            .client
            .fetch_at::<WindSpeedPayload>(at)
            .await
            .map_err(map_error)?;

        Ok(payload.map(|p| WindSpeed::new(p.date, p.north, p.west)))
    }

    async fn is_healthy(&self) -> bool {
        self.client.is_healthy().await
    }
}
