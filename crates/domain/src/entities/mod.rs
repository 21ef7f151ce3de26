//! Domain entities - Readings keyed by the day they describe

mod reading;

pub use reading::{DatedReading, Temperature, Weather, WindSpeed};
