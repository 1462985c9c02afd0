/*
 * Responsibility
 * - GET /api (greeting + deployment label)
 */
use axum::{Json, extract::State};

use super::timestamp;
use crate::{api::dto::greeting::GreetingResponse, state::AppState};

pub const DEPLOYMENT: &str = "Minikube + Jenkins + ArgoCD";

pub async fn greeting(State(state): State<AppState>) -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "Hello from Local DevOps Setup!",
        environment: state.config.environment.clone(),
        version: state.config.version.clone(),
        deployment: DEPLOYMENT,
        timestamp: timestamp(),
    })
}
