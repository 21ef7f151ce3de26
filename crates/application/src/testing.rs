//! Test doubles for the reading source port

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use domain::{DatedReading, Temperature, WindSpeed};
use mockall::mock;

use crate::{error::ApplicationError, ports::ReadingSource};

mock! {
    pub TemperatureSource {}

    #[async_trait]
    impl ReadingSource<Temperature> for TemperatureSource {
        fn provider(&self) -> &'static str;
        async fn reading_at(&self, at: DateTime<Utc>) -> Result<Option<Temperature>, ApplicationError>;
        async fn is_healthy(&self) -> bool;
    }
}

mock! {
    pub WindSpeedSource {}

    #[async_trait]
    impl ReadingSource<WindSpeed> for WindSpeedSource {
        fn provider(&self) -> &'static str;
        async fn reading_at(&self, at: DateTime<Utc>) -> Result<Option<WindSpeed>, ApplicationError>;
        async fn is_healthy(&self) -> bool;
    }
}

/// Midnight UTC of the given calendar day
pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// In-memory provider answering from a fixed set of readings
pub struct FixtureSource<R> {
    readings: HashMap<DateTime<Utc>, R>,
    failing: HashSet<DateTime<Utc>>,
    delay: Option<Duration>,
    day_delays: HashMap<DateTime<Utc>, Duration>,
    calls: AtomicUsize,
    completed: AtomicUsize,
}

impl<R: DatedReading> FixtureSource<R> {
    pub fn new(readings: impl IntoIterator<Item = R>) -> Self {
        Self {
            readings: readings.into_iter().map(|r| (r.date(), r)).collect(),
            failing: HashSet::new(),
            delay: None,
            day_delays: HashMap::new(),
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        }
    }

    /// Make the lookup for `at` fail with a transport error
    pub fn failing_on(mut self, at: DateTime<Utc>) -> Self {
        self.failing.insert(at);
        self
    }

    /// Delay every lookup before answering
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Delay only the lookup for `at`
    pub fn with_delay_on(mut self, at: DateTime<Utc>, delay: Duration) -> Self {
        self.day_delays.insert(at, delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R: DatedReading> ReadingSource<R> for FixtureSource<R> {
    fn provider(&self) -> &'static str {
        "fixture"
    }

    async fn reading_at(&self, at: DateTime<Utc>) -> Result<Option<R>, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay.or_else(|| self.day_delays.get(&at).copied()) {
            tokio::time::sleep(delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);

        if self.failing.contains(&at) {
            return Err(ApplicationError::UpstreamUnavailable(format!(
                "connection reset for {at}"
            )));
        }
        Ok(self.readings.get(&at).cloned())
    }
}
