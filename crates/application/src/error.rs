//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Upstream provider could not be reached or answered with a failure status
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream provider answered with a body that could not be decoded
    #[error("Decode failure: {0}")]
    DecodeFailure(String),

    /// Lookup was cut off by the request deadline
    #[error("Deadline exceeded")]
    DeadlineExceeded,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error rejects the requested range as a whole
    pub const fn is_range_invalid(&self) -> bool {
        matches!(self, Self::Domain(DomainError::RangeInvalid { .. }))
    }
}
