//! Provider HTTP client
//!
//! Issues a single `GET` per date against an upstream provider.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

/// Provider client errors
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connection to the provider failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the provider
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Provider is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Provider connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider base URL (default: <http://localhost:8000>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ProviderConfig {
    /// Configuration pointing at the given base URL
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for one upstream provider
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    base_url: String,
}

impl ProviderClient {
    /// Create a new provider client with the given configuration
    ///
    /// A trailing `/` on the base URL is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Format an instant the way providers expect it in the `at` parameter
    #[must_use]
    pub fn format_at(at: DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn lookup_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Fetch the reading for a single instant
    ///
    /// Returns `Ok(None)` when the provider answers `404 Not Found`.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_at<T: DeserializeOwned>(
        &self,
        at: DateTime<Utc>,
    ) -> Result<Option<T>, ProviderError> {
        let at_param = Self::format_at(at);
        debug!(at = %at_param, "Fetching reading");

        let response = self
            .client
            .get(self.lookup_url())
            .query(&[("at", at_param.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionFailed(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(at = %at_param, "No reading for date");
            return Ok(None);
        }
        if status.is_server_error() {
            return Err(ProviderError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ProviderError::RequestFailed(format!("HTTP {status}")));
        }

        let reading = response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(Some(reading))
    }

    /// Check whether the provider answers at all
    pub async fn is_healthy(&self) -> bool {
        self.client.get(self.lookup_url()).send().await.is_ok()
    }
}
