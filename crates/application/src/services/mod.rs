//! Application services - Use case implementations

mod range_service;
mod weather_composer;

use domain::{Temperature, Weather, WindSpeed};

pub use range_service::RangeService;
pub use weather_composer::{WEATHER_PROVIDER, WeatherComposer};

/// Range service over the temperature provider
pub type TemperatureService = RangeService<Temperature>;

/// Range service over the wind speed provider
pub type WindSpeedService = RangeService<WindSpeed>;

/// Range service over composed weather readings
pub type WeatherService = RangeService<Weather>;
