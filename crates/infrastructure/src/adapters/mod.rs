//! Adapters implementing application ports

mod provider_adapter;

pub use provider_adapter::{
    TEMPERATURE_PROVIDER, TemperatureAdapter, WIND_SPEED_PROVIDER, WindSpeedAdapter,
};
