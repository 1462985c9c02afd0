use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub environment: String,
    pub version: String,
    pub deployment: &'static str,
    pub timestamp: String,
}
