use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: String,
    pub environment: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub api: &'static str,
    pub users: &'static str,
    pub info: &'static str,
}

impl Endpoints {
    pub const fn new() -> Self {
        Self {
            health: "/health",
            api: "/api",
            users: "/api/users",
            info: "/api/info",
        }
    }
}
