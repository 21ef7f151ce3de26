//! Range aggregation service
//!
//! Expands an inclusive date range into one point lookup per day, runs the
//! lookups concurrently and merges whatever came back into a date-ordered
//! result set. A failing day is logged and left out; only an invalid range
//! fails the call as a whole. Days still pending at the deadline count as
//! failed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::{DateRange, DatedReading};
use tokio::{task::JoinSet, time::Instant};
use tracing::{Instrument, Span, debug, error, info_span};

use crate::{error::ApplicationError, ports::ReadingSource};

/// Generic range service over a single reading source
pub struct RangeService<R: DatedReading> {
    source: Arc<dyn ReadingSource<R>>,
    span: Span,
}

impl<R: DatedReading> std::fmt::Debug for RangeService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeService")
            .field("provider", &self.source.provider())
            .finish_non_exhaustive()
    }
}

impl<R: DatedReading> RangeService<R> {
    /// Create a service that logs under a span named after the provider
    #[must_use]
    pub fn new(source: Arc<dyn ReadingSource<R>>) -> Self {
        let span = info_span!("range_service", provider = source.provider());
        Self { source, span }
    }

    /// Name of the provider behind this service
    pub fn provider(&self) -> &'static str {
        self.source.provider()
    }

    /// Check if the provider behind this service is reachable
    pub async fn is_healthy(&self) -> bool {
        self.source.is_healthy().await
    }

    /// Look up the reading for a single instant
    pub async fn get_for_datetime(&self, at: DateTime<Utc>) -> Result<Option<R>, ApplicationError> {
        self.source.reading_at(at).instrument(self.span.clone()).await
    }

    /// Collect all readings available in `[from, to]`, sorted by date
    ///
    /// Days without data and days whose lookup failed are missing from the
    /// result. Dropping the returned future aborts every pending lookup.
    ///
    /// # Errors
    ///
    /// Returns a `RangeInvalid` domain error if `from` is after `to`. No
    /// lookup is issued in that case.
    pub async fn get_for_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<R>, ApplicationError> {
        self.collect(from, to, None).await
    }

    /// Like [`RangeService::get_for_range`], but lookups still running at
    /// `deadline` are cancelled
    ///
    /// A cancelled day is logged and left out like any other failed day, so
    /// the readings that arrived in time are still returned.
    ///
    /// # Errors
    ///
    /// Returns a `RangeInvalid` domain error if `from` is after `to`.
    pub async fn get_for_range_until(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        deadline: Instant,
    ) -> Result<Vec<R>, ApplicationError> {
        self.collect(from, to, Some(deadline)).await
    }

    async fn collect(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        deadline: Option<Instant>,
    ) -> Result<Vec<R>, ApplicationError> {
        let range = DateRange::new(from, to)?;
        let num_days = range.num_days();

        let mut workers = JoinSet::new();
        for at in range.days() {
            let source = Arc::clone(&self.source);
            workers.spawn(
                async move {
                    let lookup = source.reading_at(at);
                    let outcome = match deadline {
                        Some(deadline) => tokio::time::timeout_at(deadline, lookup)
                            .await
                            .unwrap_or(Err(ApplicationError::DeadlineExceeded)),
                        None => lookup.await,
                    };

                    match outcome {
                        Ok(reading) => reading,
                        Err(e) => {
                            error!(
                                provider = source.provider(),
                                date = %at,
                                error = %e,
                                "Failed to obtain reading"
                            );
                            None
                        },
                    }
                }
                .instrument(self.span.clone()),
            );
        }

        let mut readings = Vec::with_capacity(num_days);
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(Some(reading)) => readings.push(reading),
                Ok(None) => {},
                Err(e) => error!(
                    parent: &self.span,
                    provider = self.source.provider(),
                    error = %e,
                    "Day worker did not complete"
                ),
            }
        }

        readings.sort_by_key(|reading| reading.date());

        debug!(
            parent: &self.span,
            days = num_days,
            found = readings.len(),
            "Range lookup finished"
        );

        Ok(readings)
    }
}
