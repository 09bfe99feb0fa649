//! Data Transfer Objects for the rewards API.
//!
//! Receipt submissions arrive as untyped JSON and are validated before
//! deserialization into the core types, so there is no request DTO for
//! them here.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response to a processed receipt submission.
#[derive(Debug, Serialize)]
pub struct ProcessReceiptResponse {
    /// Identifier for later point lookups
    pub id: String,
}

/// Response to a points lookup.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    /// Reward points earned by the receipt
    pub points: u64,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}
