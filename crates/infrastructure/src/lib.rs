//! Infrastructure layer - Adapters for external systems
//!
//! Implements the reading source port against the upstream HTTP providers
//! and carries process configuration and telemetry setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ProvidersConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
