//! Shared helpers for the range handlers

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ApiError;

/// `?start=&end=` query of the range endpoints
///
/// Both values are kept raw so that a missing and a malformed value are
/// rejected with the same message.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RangeQuery {
    /// Parse both bounds into UTC instants
    pub fn bounds(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), ApiError> {
        let start = parse_datetime("start", self.start.as_deref())?;
        let end = parse_datetime("end", self.end.as_deref())?;
        Ok((start, end))
    }
}

/// Parse an ISO-8601 date-time such as `2019-01-01T00:00:00Z`,
/// `2019-01-01T00:00:00+01:00` or `2019-01-01T00:00:00+0100`
pub fn parse_datetime(name: &str, value: Option<&str>) -> Result<DateTime<Utc>, ApiError> {
    let invalid = || ApiError::BadRequest(format!("`{name}` must be an ISO8601 DateTime"));
    let value = value.map(str::trim).filter(|v| !v.is_empty()).ok_or_else(invalid)?;

    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z"))
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| invalid())
}
