/*
 * Responsibility
 * - Load Config -> build AppState -> assemble Router
 * - Apply middleware (panic catch / HTTP / fault rendering / security headers)
 * - Start with axum::serve() and stop on SIGINT / SIGTERM
 */
use std::{
    panic,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api, config::Config, middleware, services::system::RUNTIME_VERSION, state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,devops_backend=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook() {
    let default_hook = panic::take_hook();

    // Panics inside handlers are turned into 500s by CatchPanicLayer; the hook
    // only makes sure they also reach the log. Never abort.
    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");
        default_hook(info);
    }))
}

pub async fn run() -> Result<()> {
    let started_at = Instant::now();

    init_tracing();
    init_panic_hook();

    let config = Config::from_env()?;

    serve(config, started_at, shutdown_signal()).await
}

/// Bind `config.addr`, log the banner and serve until `shutdown` resolves.
///
/// A bind failure is returned as an error; the caller exits non-zero.
pub async fn serve<F>(config: Config, started_at: Instant, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.addr;

    let state = AppState::new(config, started_at);
    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    for line in banner_lines(&state.config) {
        tracing::info!("{line}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

/// Full application: the route table wrapped in every middleware layer.
pub fn build_router(state: AppState) -> Router {
    with_middleware(api::routes(), state)
}

/// Wrap an arbitrary route table in the application middleware stack.
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    with_middleware_and_timeout(routes, state, middleware::http::REQUEST_TIMEOUT)
}

/// Layer order, innermost first: panic catch, transport layers (request id,
/// trace, timeout), fault rendering, security headers.
pub fn with_middleware_and_timeout(
    routes: Router<AppState>,
    state: AppState,
    timeout: Duration,
) -> Router {
    let router = routes.with_state(state.clone());
    let router = middleware::faults::catch_panics(router);
    let router = middleware::http::apply(router, timeout);
    let router = middleware::faults::render(router, state);
    middleware::security_headers::apply(router)
}

fn banner_lines(config: &Config) -> Vec<String> {
    let rule = "=================================".to_string();
    vec![
        rule.clone(),
        "Backend API Server Started".to_string(),
        rule.clone(),
        format!("URL:         {}", config.public_url()),
        format!("Environment: {}", config.environment),
        format!("Version:     {}", config.version),
        format!("Runtime:     {}", RUNTIME_VERSION),
        rule,
    ]
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to register SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
