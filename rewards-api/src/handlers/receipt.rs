//! Receipt handlers.
//!
//! The submission body is taken as untyped JSON and run through the
//! validator before anything is deserialized; a rejected receipt produces a
//! single undifferentiated invalid-receipt error. Lookup requests get a
//! syntactic id check that is distinct from the existence check against the
//! store.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use rewards_core::{score, validate_lookup_id, validate_receipt, PointsResult, Receipt};

use crate::{
    dto::{PointsResponse, ProcessReceiptResponse},
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Validate, score, and store a submitted receipt.
pub async fn process_receipt(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    if !validate_receipt(&body) {
        return Err(ApiError::InvalidReceipt);
    }

    // Validation guarantees the shape, so a deserialization failure here
    // means the validator and the type drifted apart.
    let receipt: Receipt = serde_json::from_value(body).map_err(|e| {
        tracing::error!(error = %e, "Validated receipt failed to deserialize");
        ApiError::Internal
    })?;

    // Scoring is pure and should not panic on validated input; if it ever
    // does, report a generic internal failure instead of tearing down the
    // connection task.
    let points =
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| score(&receipt))).map_err(|_| {
            tracing::error!(retailer = %receipt.retailer, "Scoring panicked");
            ApiError::Internal
        })?;

    let id = state.store.save(PointsResult { points });
    tracing::info!(receipt_id = %id, points, retailer = %receipt.retailer, "Receipt scored");

    Ok(Json(ProcessReceiptResponse { id }))
}

/// Look up the stored points for a processed receipt.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    if !validate_lookup_id(&id) {
        return Err(ApiError::InvalidRequest);
    }

    let result = state.store.get(&id).ok_or(ApiError::NotFound)?;

    Ok(Json(PointsResponse {
        points: result.points,
    }))
}
