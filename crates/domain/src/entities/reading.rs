//! Dated readings reported by upstream providers
//!
//! `Temperature` and `WindSpeed` come straight from a provider, `Weather`
//! is derived per day from both of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A measurement keyed by the calendar day it was taken on
pub trait DatedReading: Clone + Send + Sync + 'static {
    /// The day this reading belongs to
    fn date(&self) -> DateTime<Utc>;
}

/// Temperature reading for a single day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Temperature value
    #[serde(rename = "temp")]
    pub temperature: f64,
    /// Day of the reading
    pub date: DateTime<Utc>,
}

/// Wind speed reading for a single day, split into two components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSpeed {
    /// Northward component
    pub north: f64,
    /// Westward component
    pub west: f64,
    /// Day of the reading
    pub date: DateTime<Utc>,
}

/// Combined weather for a single day
///
/// Only exists for days where both a temperature and a wind speed reading
/// are available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// Northward wind component
    pub north: f64,
    /// Westward wind component
    pub west: f64,
    /// Temperature value
    #[serde(rename = "temp")]
    pub temperature: f64,
    /// Day of the reading
    pub date: DateTime<Utc>,
}

impl Temperature {
    #[must_use]
    pub const fn new(date: DateTime<Utc>, temperature: f64) -> Self {
        Self { temperature, date }
    }
}

impl WindSpeed {
    #[must_use]
    pub const fn new(date: DateTime<Utc>, north: f64, west: f64) -> Self {
        Self { north, west, date }
    }
}

impl Weather {
    /// Merge the readings of both providers for the requested instant
    #[must_use]
    pub const fn compose(at: DateTime<Utc>, temperature: &Temperature, wind: &WindSpeed) -> Self {
        Self {
            north: wind.north,
            west: wind.west,
            temperature: temperature.temperature,
            date: at,
        }
    }
}

impl DatedReading for Temperature {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl DatedReading for WindSpeed {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl DatedReading for Weather {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}
