/*
 * Responsibility
 * - GET /api/info (platform, memory, uptime + app settings)
 * - The only handler that can fault: the memory lookup may fail
 */
use axum::{Json, extract::State};

use crate::{
    api::dto::info::{AppInfo, InfoResponse, MemoryInfo, SystemInfo},
    error::AppError,
    services::system::{self, RUNTIME_VERSION},
    state::AppState,
};

pub async fn info(State(state): State<AppState>) -> Result<Json<InfoResponse>, AppError> {
    let memory = system::memory_usage()?;

    Ok(Json(InfoResponse {
        system: SystemInfo {
            platform: system::platform(),
            arch: system::arch(),
            node_version: RUNTIME_VERSION,
            memory: MemoryInfo {
                total: memory.total_mb(),
                used: memory.used_mb(),
            },
            uptime: system::format_uptime(state.uptime_secs()),
        },
        app: AppInfo {
            version: state.config.version.clone(),
            environment: state.config.environment.clone(),
            port: state.config.port,
        },
    }))
}
