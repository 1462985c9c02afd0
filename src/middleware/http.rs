//! Transport layers shared by every route: request ids, access log, timeout.
//!
//! Nothing here answers a request on its own. A timeout is reported as an
//! `AppError`, so the client gets the same 500 envelope as any handler fault.
//! Request bodies are never read by the routes and are not limited.

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::header::HeaderName;
use axum::response::{IntoResponse, Response};
use tower::timeout::{TimeoutLayer, error::Elapsed};
use tower::{BoxError, ServiceBuilder};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wrap `router` in request-id, tracing and timeout layers.
pub fn apply(router: Router, timeout: Duration) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(TraceLayer::new_for_http())
        .layer(HandleErrorLayer::new(transport_error))
        .layer(TimeoutLayer::new(timeout));

    router.layer(layers)
}

async fn transport_error(err: BoxError) -> Response {
    fault_for(err).into_response()
}

fn fault_for(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::internal("request timed out")
    } else {
        AppError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_maps_to_timeout_fault() {
        let err: BoxError = Box::new(Elapsed::new());
        assert_eq!(fault_for(err).to_string(), "request timed out");
    }

    #[test]
    fn other_errors_keep_their_message() {
        let err: BoxError = "upstream closed".into();
        assert_eq!(fault_for(err).to_string(), "upstream closed");
    }
}
