use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub system: SystemInfo,
    pub app: AppInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub platform: &'static str,
    pub arch: &'static str,
    pub node_version: &'static str,
    pub memory: MemoryInfo,
    pub uptime: String,
}

#[derive(Debug, Serialize)]
pub struct MemoryInfo {
    pub total: String,
    pub used: String,
}

#[derive(Debug, Serialize)]
pub struct AppInfo {
    pub version: String,
    pub environment: String,
    pub port: u16,
}
