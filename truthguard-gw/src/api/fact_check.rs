//! Fact-check endpoint

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use truthguard_core::{DetectionMethod, FactCheckInput, FactCheckResult};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Fact-check response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckResponse {
    /// Fresh id per request; nothing is persisted server-side
    pub id: Uuid,
    #[serde(flatten)]
    pub result: FactCheckResult,
    pub checked_at: DateTime<Utc>,
}

/// POST /api/v1/fact-check
///
/// Validates that at least one input field is meaningfully present, runs the
/// core pipeline, and shapes the response. The pipeline itself never errors;
/// a degraded result is still HTTP 200, differentiated only by its verdict
/// and detection methods.
pub async fn fact_check(
    State(state): State<AppState>,
    Json(input): Json<FactCheckInput>,
) -> ApiResult<Json<FactCheckResponse>> {
    if input.is_empty() {
        return Err(ApiError::BadRequest(
            "At least one of inputText, inputUrl, or inputImageUrl is required".to_string(),
        ));
    }

    let result = state.orchestrator.run(&input).await;

    if result
        .detection_methods
        .iter()
        .any(|m| matches!(m, DetectionMethod::Error | DetectionMethod::ErrorFallback))
    {
        let diagnostic = format!(
            "fact-check degraded: verdict={} methods={:?}",
            result.verdict.as_str(),
            result.detection_methods
        );
        warn!("{}", diagnostic);
        *state.last_error.write().await = Some(diagnostic);
    }

    Ok(Json(FactCheckResponse {
        id: Uuid::new_v4(),
        result,
        checked_at: Utc::now(),
    }))
}

/// Build fact-check routes
pub fn fact_check_routes() -> Router<AppState> {
    Router::new().route("/api/v1/fact-check", post(fact_check))
}
