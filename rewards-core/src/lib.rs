//! Receipt Rewards Core
//!
//! Domain logic for the receipt rewards service:
//!
//! - [`validate::validate_receipt`]: field-level format validation of a
//!   submitted receipt, applied to the untyped parsed JSON before anything
//!   else touches it
//! - [`score::score`]: the deterministic reward-points calculation over a
//!   validated receipt
//! - [`store::ResultStore`]: the in-memory `id -> points` store
//!
//! Everything in this crate is pure synchronous computation apart from the
//! store, which is internally synchronized and safe to share across request
//! handlers behind an `Arc`.
//!
//! # Core Types
//!
//! - [`Receipt`]: a purchase record submitted for scoring
//! - [`ReceiptItem`]: one line entry on a receipt (description + price)
//! - [`PointsResult`]: the stored points value for a processed receipt

pub mod score;
pub mod store;
pub mod types;
pub mod validate;

pub use score::score;
pub use store::ResultStore;
pub use types::{PointsResult, Receipt, ReceiptItem};
pub use validate::{validate_lookup_id, validate_receipt};
