/*
 * Responsibility
 * - Shared AppError definition for handlers
 * - The single fallback stage that turns any handler fault (Err or panic)
 *   into the 500 envelope: {error, message, environment}
 * - Faults are logged here, nowhere else
 */
use std::any::Any;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::system::SystemError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InternalErrorResponse {
    pub error: &'static str,
    pub message: String,
    pub environment: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Marker carried on a bare 500 response until `render_faults` replaces it.
///
/// `IntoResponse` has no access to AppState, so the environment name is
/// filled in by the middleware.
#[derive(Clone, Debug)]
pub struct Fault {
    pub message: Arc<str>,
    pub detail: Arc<str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let fault = Fault {
            message: self.to_string().into(),
            detail: format!("{self:?}").into(),
        };

        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        res.extensions_mut().insert(fault);
        res
    }
}

impl From<SystemError> for AppError {
    fn from(e: SystemError) -> Self {
        AppError::internal(e.to_string())
    }
}

/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_to_fault(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(message).into_response()
}

/// Fallback stage wrapping router dispatch.
pub async fn render_faults(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let res = next.run(req).await;

    let Some(fault) = res.extensions().get::<Fault>().cloned() else {
        return res;
    };

    tracing::error!(
        %method,
        %path,
        detail = %fault.detail,
        "Error: {}",
        fault.message
    );
    let mut rendered = internal_error(&state.config.environment, &fault.message);

    // keep headers set by inner layers (x-request-id etc.), every value of each
    let inherited: Vec<_> = res
        .headers()
        .keys()
        .filter(|name| {
            **name != header::CONTENT_LENGTH && !rendered.headers().contains_key(*name)
        })
        .cloned()
        .collect();
    for name in inherited {
        for value in res.headers().get_all(&name) {
            rendered.headers_mut().append(name.clone(), value.clone());
        }
    }
    rendered
}

pub fn internal_error(environment: &str, message: &str) -> Response {
    let body = InternalErrorResponse {
        error: "Internal Server Error",
        message: message.to_owned(),
        environment: environment.to_owned(),
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use axum::{Router, body::Body, response::AppendHeaders, routing::get};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    #[test]
    fn app_error_marks_response_as_fault() {
        let res = AppError::internal("disk on fire").into_response();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let fault = res.extensions().get::<Fault>().unwrap();
        assert_eq!(&*fault.message, "disk on fire");
    }

    #[test]
    fn panic_payloads_keep_their_message() {
        let res = panic_to_fault(Box::new("static str"));
        assert_eq!(&*res.extensions().get::<Fault>().unwrap().message, "static str");

        let res = panic_to_fault(Box::new(String::from("owned")));
        assert_eq!(&*res.extensions().get::<Fault>().unwrap().message, "owned");

        let res = panic_to_fault(Box::new(42_u32));
        assert_eq!(
            &*res.extensions().get::<Fault>().unwrap().message,
            "handler panicked"
        );
    }

    #[test]
    fn system_errors_convert_to_internal() {
        let err: AppError = SystemError::Pid("unsupported").into();
        assert_eq!(err.to_string(), "unable to determine current pid: unsupported");
    }

    #[tokio::test]
    async fn rendered_fault_keeps_every_header_value() {
        async fn failing() -> impl IntoResponse {
            (
                AppendHeaders([(header::SET_COOKIE, "a=1"), (header::SET_COOKIE, "b=2")]),
                AppError::internal("boom"),
            )
        }

        let state = AppState::new(Config::default(), Instant::now());
        let router = Router::new()
            .route("/", get(failing))
            .layer(axum::middleware::from_fn_with_state(state, render_faults));

        let req = axum::http::Request::builder().uri("/").body(Body::empty()).unwrap();
        let res = router.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let cookies: Vec<&str> = res
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(cookies, ["a=1", "b=2"]);
        assert!(
            res.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("application/json")
        );
    }
}
