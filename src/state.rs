/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 *   - config: immutable settings read once at startup
 *   - started_at: reference instant for uptime
 * - Meant to be cloned per request (Arc / Copy inside, so cheap)
 */
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::services::system;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, started_at: Instant) -> Self {
        Self {
            config: Arc::new(config),
            started_at,
        }
    }

    pub fn uptime_secs(&self) -> f64 {
        system::uptime_secs(self.started_at)
    }
}
