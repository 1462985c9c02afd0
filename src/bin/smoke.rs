/*
 * Responsibility
 * - Standalone smoke check, not part of the served system
 *   1. the web stack works: build the router in-process and GET /health
 *   2. configuration resolves (prints PORT / VERSION)
 *   3. a trivial logic check
 * - Exit 1 on the first failure, 0 otherwise
 */
use std::process::ExitCode;
use std::time::Instant;

use axum::{body::Body, http::Request, http::StatusCode};
use tower::ServiceExt;

use devops_backend::{app, config::Config, state::AppState};

fn sum(a: i32, b: i32) -> i32 {
    a + b
}

async fn check_router(config: Config) -> Result<(), String> {
    let router = app::build_router(AppState::new(config, Instant::now()));

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .map_err(|e| e.to_string())?;

    let res = router.oneshot(req).await.map_err(|e| e.to_string())?;

    if res.status() == StatusCode::OK {
        Ok(())
    } else {
        Err(format!("GET /health returned {}", res.status()))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    println!("Running smoke checks...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FAIL: configuration could not be loaded: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = check_router(config.clone()).await {
        eprintln!("FAIL 1: web stack not usable: {e}");
        return ExitCode::FAILURE;
    }
    println!("ok   1: router built and GET /health answered 200");

    println!(
        "ok   2: configuration loaded (PORT: {}, VERSION: {})",
        config.port, config.version
    );

    if sum(2, 3) != 5 {
        eprintln!("FAIL 3: basic logic check failed");
        return ExitCode::FAILURE;
    }
    println!("ok   3: basic logic check passed");

    println!();
    println!("All smoke checks passed");
    ExitCode::SUCCESS
}
