//! Reading source port
//!
//! Defines the point lookup through which a single provider is asked for
//! its reading on one exact date.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::DatedReading;

use crate::error::ApplicationError;

/// Port for resolving one provider's reading for one date
///
/// The three outcomes are distinct on purpose:
/// * `Ok(Some(reading))` - the provider has a reading for `at`
/// * `Ok(None)` - the provider has nothing for `at`
/// * `Err(_)` - the lookup failed (transport, status, decoding)
///
/// Dropping the returned future cancels the lookup.
#[async_trait]
pub trait ReadingSource<R: DatedReading>: Send + Sync {
    /// Name of the provider, used as a log field
    fn provider(&self) -> &'static str;

    /// Look up the reading for the given instant
    async fn reading_at(&self, at: DateTime<Utc>) -> Result<Option<R>, ApplicationError>;

    /// Check if the provider can currently be reached
    async fn is_healthy(&self) -> bool {
        true
    }
}
