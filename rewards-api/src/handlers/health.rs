//! Health handler.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{dto::HealthResponse, state::AppState};

/// Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        timestamp: Utc::now(),
    })
}
