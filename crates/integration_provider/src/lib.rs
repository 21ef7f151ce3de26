//! Upstream provider integration
//!
//! Client for the per-day reading providers. A provider answers
//! `GET {base_url}/?at=<ISO-8601>` with the reading for that date, or with
//! `404 Not Found` when it has none.

pub mod client;
mod models;

pub use client::{ProviderClient, ProviderConfig, ProviderError};
pub use models::{TemperaturePayload, WindSpeedPayload};
