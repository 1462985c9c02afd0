//! Fault fallback stage.
//!
//! Two layers cooperate:
//! - `CatchPanicLayer` (innermost) turns a handler panic into an `AppError` response.
//! - `render_faults` (outside the transport layers) renders every `AppError`
//!   response as the 500 JSON envelope and logs it.

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::{panic_to_fault, render_faults};
use crate::state::AppState;

/// Catch panics raised by handlers. Apply directly on top of the routes.
pub fn catch_panics(router: Router) -> Router {
    router.layer(CatchPanicLayer::custom(panic_to_fault))
}

/// Render faults as the 500 envelope. Apply after the transport layers.
pub fn render(router: Router, state: AppState) -> Router {
    router.layer(axum::middleware::from_fn_with_state(state, render_faults))
}
