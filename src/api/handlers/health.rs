/*
 * Responsibility
 * - GET /health (liveness probe)
 */
use axum::{Json, extract::State};

use super::timestamp;
use crate::{
    api::dto::health::HealthResponse, services::system::RUNTIME_VERSION, state::AppState,
};

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        uptime: state.uptime_secs(),
        timestamp: timestamp(),
        environment: state.config.environment.clone(),
        version: state.config.version.clone(),
        node_version: RUNTIME_VERSION,
    })
}
