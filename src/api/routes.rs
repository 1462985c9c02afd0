/*
 * Responsibility
 * - The fixed route table (method + path -> handler)
 * - 404 fallback for anything outside it, including wrong methods on known paths
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{
    greeting::greeting, health::health, info::info, not_found::not_found, root::root,
    users::list_users,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .route("/api", get(greeting))
        .route("/api/users", get(list_users))
        .route("/api/info", get(info))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}
