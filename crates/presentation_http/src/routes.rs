//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Range lookups
        .route("/temperatures", get(handlers::readings::get_temperatures))
        .route("/speeds", get(handlers::readings::get_wind_speeds))
        .route("/weather", get(handlers::readings::get_weather))
        // Attach state
        .with_state(state)
}
