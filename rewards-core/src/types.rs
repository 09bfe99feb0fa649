//! Receipt domain types.
//!
//! Monetary amounts stay as decimal strings end to end. Parsing them into a
//! numeric type too early would lose the exact cent formatting the scoring
//! rules inspect (a `"9.00"` total earns the round-dollar bonus, a `"9.0"`
//! never reaches scoring because validation requires two cent digits).

use serde::{Deserialize, Serialize};

/// A purchase receipt submitted for scoring.
///
/// Wire field names are camelCase to match the submission format. A
/// `Receipt` is only ever constructed from JSON that has already passed
/// [`crate::validate::validate_receipt`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer name
    pub retailer: String,
    /// Purchase date as `YYYY-MM-DD`
    pub purchase_date: String,
    /// Purchase time as 24-hour `HH:MM`
    pub purchase_time: String,
    /// Line items, at least one
    pub items: Vec<ReceiptItem>,
    /// Grand total as a decimal string with exactly two cent digits
    pub total: String,
}

/// One line entry on a receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    /// Item description
    pub short_description: String,
    /// Item price as a decimal string with exactly two cent digits
    pub price: String,
}

/// The stored scoring outcome for a processed receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResult {
    /// Total reward points
    pub points: u64,
}
