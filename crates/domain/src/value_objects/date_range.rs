//! Date range value object
//!
//! An inclusive window of calendar days between two instants.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use domain::value_objects::DateRange;
//!
//! let from = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).single().expect("valid date");
//! let to = Utc.with_ymd_and_hms(2019, 1, 3, 0, 0, 0).single().expect("valid date");
//!
//! let range = DateRange::new(from, to).expect("valid range");
//! assert_eq!(range.num_days(), 3);
//! assert_eq!(range.days().count(), 3);
//!
//! // Reversed bounds are rejected
//! assert!(DateRange::new(to, from).is_err());
//! ```

use chrono::{DateTime, Duration, Utc};

use crate::errors::DomainError;

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Inclusive day-granularity range `[from, to]`
///
/// The day starting at `to` is part of the range, so a range with
/// `from == to` covers exactly one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl DateRange {
    /// Create a new validated date range
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RangeInvalid` if `from` is after `to`, and
    /// `DomainError::InvalidDateTime` if `to` is too close to the end of
    /// the representable time line to be extended by one day.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self, DomainError> {
        if from > to {
            return Err(DomainError::range_invalid(from, to));
        }
        if to.checked_add_signed(Duration::days(1)).is_none() {
            return Err(DomainError::InvalidDateTime(format!(
                "{to} cannot be extended by one day"
            )));
        }
        Ok(Self { from, to })
    }

    /// First instant of the range
    #[must_use]
    pub const fn from(&self) -> DateTime<Utc> {
        self.from
    }

    /// Last day of the range
    #[must_use]
    pub const fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// Exclusive end of the walk: `to` plus one day
    fn end(&self) -> DateTime<Utc> {
        // Checked in `new`
        self.to + Duration::days(1)
    }

    /// Number of per-day lookups this range expands to
    ///
    /// `ceil((to + 1d - from) / 24h)`, always at least one.
    #[must_use]
    pub fn num_days(&self) -> usize {
        let millis = (self.end() - self.from).num_milliseconds();
        let days = u64::try_from(millis).unwrap_or(0).div_ceil(MILLIS_PER_DAY);
        usize::try_from(days).unwrap_or(usize::MAX)
    }

    /// Iterate `from, from + 1d, from + 2d, ...` while before `to + 1d`
    #[must_use]
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.from),
            end: self.end(),
        }
    }

    /// Check whether an instant falls into `[from, to + 1d)`
    #[must_use]
    pub fn contains_day(&self, at: DateTime<Utc>) -> bool {
        self.from <= at && at < self.end()
    }
}

/// Iterator over the days of a [`DateRange`]
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<DateTime<Utc>>,
    end: DateTime<Utc>,
}

impl Iterator for Days {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let at = self.next.filter(|at| *at < self.end)?;
        self.next = at.checked_add_signed(Duration::days(1));
        Some(at)
    }
}
