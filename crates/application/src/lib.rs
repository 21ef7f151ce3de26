//! Application layer - Use cases and orchestration
//!
//! Contains the range aggregation use case, the weather composition and the
//! port through which upstream providers are reached.

pub mod error;
pub mod ports;
pub mod services;
#[cfg(test)]
pub(crate) mod testing;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
