//! API Router
//!
//! Route definitions for the rewards API.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, state::AppState};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health_check))
        // Receipt endpoints
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/:id/points", get(handlers::get_points))
        .with_state(state)
}
