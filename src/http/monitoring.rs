//! Monitoring and health check handlers.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "orchestrator-server";

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status, always `ok` while the process serves requests.
    pub status: String,
    /// Time the check was answered.
    pub timestamp: DateTime<Utc>,
    /// Service identifier, for consumers probing several local backends.
    pub service: String,
}

/// Health check handler.
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        service: SERVICE_NAME.to_string(),
    })
}
