//! JSON bodies returned by the API.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: "logdrop".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: vec![
                "POST /upload".to_string(),
                "GET /check/{job_id}".to_string(),
                "GET /done/{job_id}".to_string(),
                "GET /api/logs (SSE)".to_string(),
            ],
        }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
    })
}
