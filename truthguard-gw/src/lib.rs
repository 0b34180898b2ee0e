//! truthguard-gw library interface for testing
//!
//! Exposes the application state and router builder for integration tests.

pub mod api;
pub mod config;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use truthguard_core::FactCheckOrchestrator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The core fact-check pipeline
    pub orchestrator: Arc<FactCheckOrchestrator>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
    /// Last degraded-result diagnostic, surfaced via /health
    pub last_error: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new(orchestrator: FactCheckOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            startup_time: Utc::now(),
            last_error: Arc::new(RwLock::new(None)),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::fact_check_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
