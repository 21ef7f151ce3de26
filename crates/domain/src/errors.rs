//! Domain-level errors

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The start of a date range lies after its end
    #[error("`start` must be before `end`")]
    RangeInvalid {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}

impl DomainError {
    /// Create a range invalid error
    pub const fn range_invalid(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self::RangeInvalid { from, to }
    }
}
