//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub providers: ProvidersStatus,
}

/// Reachability of the upstream providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersStatus {
    pub temperature: bool,
    pub wind_speed: bool,
}

/// Readiness check - can both upstream providers be reached?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let (temperature, wind_speed) = tokio::join!(
        state.temperature.is_healthy(),
        state.wind_speed.is_healthy()
    );

    let ready = temperature && wind_speed;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            providers: ProvidersStatus {
                temperature,
                wind_speed,
            },
        }),
    )
}
