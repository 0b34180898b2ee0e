//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub uptime_seconds: i64,
    /// Evidence sources in priority order
    pub evidence_sources: Vec<&'static str>,
    /// Reasoning sources in priority order
    pub reasoning_sources: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

/// GET /health
///
/// Health check endpoint for monitoring. Reports which backing capabilities
/// are configured, without exposing any credential values.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let last_error = state.last_error.read().await.clone();

    Json(HealthResponse {
        status: "ok".to_string(),
        module: "truthguard-gw".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (Utc::now() - state.startup_time).num_seconds(),
        evidence_sources: state.orchestrator.evidence_sources(),
        reasoning_sources: state.orchestrator.reasoning_sources(),
        last_error,
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
