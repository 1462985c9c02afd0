/*
 * Responsibility
 * - Fallback for every (method, path) outside the route table
 * - Also used for known paths hit with the wrong method (404, not 405)
 */
use axum::{
    Json,
    http::{StatusCode, Uri},
};

use crate::api::dto::not_found::NotFoundResponse;

pub async fn not_found(uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Not Found",
            path: uri.path().to_owned(),
            message: "The requested endpoint does not exist",
        }),
    )
}
