/*
 * Responsibility
 * - GET / (welcome message + endpoint map)
 */
use axum::{Json, extract::State};

use crate::{
    api::dto::root::{Endpoints, RootResponse},
    state::AppState,
};

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to DevOps Backend API",
        version: state.config.version.clone(),
        environment: state.config.environment.clone(),
        endpoints: Endpoints::new(),
    })
}
