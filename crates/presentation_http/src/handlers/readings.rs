//! Range handlers for temperatures, wind speeds and weather

use application::RangeService;
use axum::{
    Json,
    extract::{Query, State},
};
use domain::{DatedReading, Temperature, Weather, WindSpeed};
use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, instrument};

use super::common::RangeQuery;
use crate::{error::ApiError, state::AppState};

async fn readings_in_range<R>(
    service: &RangeService<R>,
    query: &RangeQuery,
    state: &AppState,
) -> Result<Json<Vec<R>>, ApiError>
where
    R: DatedReading + Serialize,
{
    let (start, end) = query.bounds()?;
    let deadline = Instant::now() + state.request_timeout;
    let readings = service.get_for_range_until(start, end, deadline).await?;

    debug!(
        provider = service.provider(),
        count = readings.len(),
        "Range request served"
    );
    Ok(Json(readings))
}

/// `GET /temperatures?start=&end=`
#[instrument(skip(state))]
pub async fn get_temperatures(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<Temperature>>, ApiError> {
    readings_in_range(&state.temperature, &query, &state).await
}

/// `GET /speeds?start=&end=`
#[instrument(skip(state))]
pub async fn get_wind_speeds(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<WindSpeed>>, ApiError> {
    readings_in_range(&state.wind_speed, &query, &state).await
}

/// `GET /weather?start=&end=`
///
/// Only days on which both providers have a reading are returned.
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<Weather>>, ApiError> {
    readings_in_range(&state.weather, &query, &state).await
}
