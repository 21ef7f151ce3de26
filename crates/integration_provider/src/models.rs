//! Provider wire payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body returned by the temperature provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperaturePayload {
    pub temp: f64,
    pub date: DateTime<Utc>,
}

/// Body returned by the wind speed provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSpeedPayload {
    pub north: f64,
    pub west: f64,
    pub date: DateTime<Utc>,
}
