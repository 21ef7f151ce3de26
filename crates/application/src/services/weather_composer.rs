//! Weather composition
//!
//! Derives a `Weather` reading for one day from the temperature and wind
//! speed providers. Both point lookups run concurrently; the day only has
//! weather when both providers have a reading for it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{Temperature, Weather, WindSpeed};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::ReadingSource};

/// Provider name of composed weather readings
pub const WEATHER_PROVIDER: &str = "weather";

/// Joins temperature and wind speed lookups into weather readings
pub struct WeatherComposer {
    temperature: Arc<dyn ReadingSource<Temperature>>,
    wind_speed: Arc<dyn ReadingSource<WindSpeed>>,
}

impl std::fmt::Debug for WeatherComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherComposer")
            .field("temperature", &self.temperature.provider())
            .field("wind_speed", &self.wind_speed.provider())
            .finish()
    }
}

impl WeatherComposer {
    #[must_use]
    pub fn new(
        temperature: Arc<dyn ReadingSource<Temperature>>,
        wind_speed: Arc<dyn ReadingSource<WindSpeed>>,
    ) -> Self {
        Self {
            temperature,
            wind_speed,
        }
    }
}

#[async_trait]
impl ReadingSource<Weather> for WeatherComposer {
    fn provider(&self) -> &'static str {
        WEATHER_PROVIDER
    }

    /// Compose the weather for `at`
    ///
    /// The temperature outcome is settled first: its error is returned
    /// as is, and a missing temperature means no weather whatever the wind
    /// speed lookup did. Only then is the wind speed outcome looked at.
    #[instrument(skip(self))]
    async fn reading_at(&self, at: DateTime<Utc>) -> Result<Option<Weather>, ApplicationError> {
        let (temperature, wind_speed) = tokio::join!(
            self.temperature.reading_at(at),
            self.wind_speed.reading_at(at)
        );

        let Some(temperature) = temperature? else {
            debug!("No temperature, no weather for day");
            return Ok(None);
        };
        let Some(wind_speed) = wind_speed? else {
            debug!("No wind speed, no weather for day");
            return Ok(None);
        };

        Ok(Some(Weather::compose(at, &temperature, &wind_speed)))
    }

    async fn is_healthy(&self) -> bool {
        let (temperature, wind_speed) =
            tokio::join!(self.temperature.is_healthy(), self.wind_speed.is_healthy());
        temperature && wind_speed
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::services::RangeService;
    use crate::testing::{FixtureSource, MockTemperatureSource, MockWindSpeedSource, day};

    fn temperature_returning(
        result: fn(DateTime<Utc>) -> Result<Option<Temperature>, ApplicationError>,
    ) -> Arc<MockTemperatureSource> {
        let mut source = MockTemperatureSource::new();
        source.expect_provider().return_const("temperature");
        source.expect_reading_at().returning(move |at| result(at));
        Arc::new(source)
    }

    fn wind_returning(
        result: fn(DateTime<Utc>) -> Result<Option<WindSpeed>, ApplicationError>,
    ) -> Arc<MockWindSpeedSource> {
        let mut source = MockWindSpeedSource::new();
        source.expect_provider().return_const("wind_speed");
        source.expect_reading_at().returning(move |at| result(at));
        Arc::new(source)
    }

    #[tokio::test]
    async fn composes_both_readings() {
        let composer = WeatherComposer::new(
            temperature_returning(|at| Ok(Some(Temperature::new(at, 1.1)))),
            wind_returning(|at| Ok(Some(WindSpeed::new(at, 1.2, 1.3)))),
        );

        let weather = composer.reading_at(day(2019, 1, 1)).await.unwrap().unwrap();

        assert_eq!(
            weather,
            Weather {
                north: 1.2,
                west: 1.3,
                temperature: 1.1,
                date: day(2019, 1, 1),
            }
        );
    }

    #[tokio::test]
    async fn missing_wind_means_no_weather() {
        let composer = WeatherComposer::new(
            temperature_returning(|at| Ok(Some(Temperature::new(at, 1.1)))),
            wind_returning(|_| Ok(None)),
        );

        assert!(composer.reading_at(day(2019, 1, 1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_temperature_means_no_weather() {
        let composer = WeatherComposer::new(
            temperature_returning(|_| Ok(None)),
            wind_returning(|at| Ok(Some(WindSpeed::new(at, 1.2, 1.3)))),
        );

        assert!(composer.reading_at(day(2019, 1, 1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn temperature_error_is_returned() {
        let composer = WeatherComposer::new(
            temperature_returning(|_| {
                Err(ApplicationError::UpstreamUnavailable("temperature down".into()))
            }),
            wind_returning(|at| Ok(Some(WindSpeed::new(at, 1.2, 1.3)))),
        );

        let err = composer.reading_at(day(2019, 1, 1)).await.unwrap_err();
        assert_eq!(err.to_string(), "Upstream unavailable: temperature down");
    }

    #[tokio::test]
    async fn wind_error_is_returned() {
        let composer = WeatherComposer::new(
            temperature_returning(|at| Ok(Some(Temperature::new(at, 1.1)))),
            wind_returning(|_| Err(ApplicationError::DecodeFailure("bad body".into()))),
        );

        let err = composer.reading_at(day(2019, 1, 1)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::DecodeFailure(msg) if msg == "bad body"));
    }

    #[tokio::test]
    async fn temperature_error_wins_when_both_fail() {
        let composer = WeatherComposer::new(
            temperature_returning(|_| {
                Err(ApplicationError::UpstreamUnavailable("temperature down".into()))
            }),
            wind_returning(|_| Err(ApplicationError::UpstreamUnavailable("wind down".into()))),
        );

        let err = composer.reading_at(day(2019, 1, 1)).await.unwrap_err();
        assert!(err.to_string().contains("temperature down"));
    }

    #[tokio::test]
    async fn missing_temperature_masks_wind_error() {
        let composer = WeatherComposer::new(
            temperature_returning(|_| Ok(None)),
            wind_returning(|_| Err(ApplicationError::UpstreamUnavailable("wind down".into()))),
        );

        let result = composer.reading_at(day(2019, 1, 1)).await;
        assert!(matches!(result, Ok(None)), "got: {result:?}");
    }

    #[tokio::test]
    async fn temperature_error_reported_even_if_wind_has_no_data() {
        let composer = WeatherComposer::new(
            temperature_returning(|_| Err(ApplicationError::DecodeFailure("bad body".into()))),
            wind_returning(|_| Ok(None)),
        );

        let err = composer.reading_at(day(2019, 1, 1)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::DecodeFailure(msg) if msg == "bad body"));
    }

    #[tokio::test]
    async fn both_lookups_are_issued_for_the_same_instant() {
        let at = day(2019, 1, 2);
        let mut temperature = MockTemperatureSource::new();
        temperature
            .expect_reading_at()
            .withf(move |requested| *requested == at)
            .times(1)
            .returning(|at| Ok(Some(Temperature::new(at, 2.2))));
        let mut wind = MockWindSpeedSource::new();
        wind.expect_reading_at()
            .withf(move |requested| *requested == at)
            .times(1)
            .returning(|at| Ok(Some(WindSpeed::new(at, 2.3, 2.4))));

        let composer = WeatherComposer::new(Arc::new(temperature), Arc::new(wind));
        assert!(composer.reading_at(at).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn lookups_run_concurrently() {
        let delay = Duration::from_millis(200);
        let composer = WeatherComposer::new(
            Arc::new(
                FixtureSource::new([Temperature::new(day(2019, 1, 1), 1.1)]).with_delay(delay),
            ),
            Arc::new(
                FixtureSource::new([WindSpeed::new(day(2019, 1, 1), 1.2, 1.3)]).with_delay(delay),
            ),
        );

        let started = Instant::now();
        assert!(composer.reading_at(day(2019, 1, 1)).await.unwrap().is_some());
        assert!(started.elapsed() < Duration::from_millis(390));
    }

    #[tokio::test]
    async fn weather_range_keeps_only_fully_covered_days() {
        let temperature = FixtureSource::new([
            Temperature::new(day(2019, 1, 1), 1.1),
            Temperature::new(day(2019, 1, 2), 2.1),
            Temperature::new(day(2019, 1, 3), 3.1),
            Temperature::new(day(2019, 1, 4), 4.1),
        ])
        .failing_on(day(2019, 1, 3));
        let wind = FixtureSource::new([
            WindSpeed::new(day(2019, 1, 1), 1.2, 1.3),
            WindSpeed::new(day(2019, 1, 3), 3.2, 3.3),
            WindSpeed::new(day(2019, 1, 4), 4.2, 4.3),
        ]);

        let service = RangeService::<Weather>::new(Arc::new(WeatherComposer::new(
            Arc::new(temperature),
            Arc::new(wind),
        )));
        let result = service
            .get_for_range(day(2019, 1, 1), day(2019, 1, 4))
            .await
            .unwrap();

        let dates: Vec<_> = result.iter().map(|w| w.date).collect();
        assert_eq!(dates, vec![day(2019, 1, 1), day(2019, 1, 4)]);
        assert_eq!(service.provider(), WEATHER_PROVIDER);
    }

    #[tokio::test]
    async fn healthy_only_when_both_providers_are() {
        for (temperature_up, wind_up) in [(true, true), (true, false), (false, true)] {
            let mut temperature = MockTemperatureSource::new();
            temperature
                .expect_is_healthy()
                .returning(move || temperature_up);
            let mut wind = MockWindSpeedSource::new();
            wind.expect_is_healthy().returning(move || wind_up);

            let composer = WeatherComposer::new(Arc::new(temperature), Arc::new(wind));
            assert_eq!(composer.is_healthy().await, temperature_up && wind_up);
        }
    }
}
