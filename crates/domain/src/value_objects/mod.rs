//! Value Objects - Immutable, identity-less domain primitives

mod date_range;

pub use date_range::{DateRange, Days};
