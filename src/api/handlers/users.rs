/*
 * Responsibility
 * - GET /api/users (fixed mock list, no storage behind it)
 */
use axum::{Json, extract::State};

use crate::{
    api::dto::users::{MOCK_USERS, UsersResponse},
    state::AppState,
};

pub async fn list_users(State(state): State<AppState>) -> Json<UsersResponse> {
    Json(UsersResponse {
        users: &MOCK_USERS,
        count: MOCK_USERS.len(),
        environment: state.config.environment.clone(),
        version: state.config.version.clone(),
    })
}
