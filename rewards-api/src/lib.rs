//! Receipt Rewards REST API
//!
//! HTTP layer over [`rewards_core`]: validates submitted receipts, scores
//! them, and serves point lookups.
//!
//! # Endpoints
//!
//! - `POST /receipts/process` - Validate, score, and store a receipt
//! - `GET /receipts/:id/points` - Look up the points for a processed receipt
//! - `GET /health` - Health check
//!
//! # Usage
//!
//! ```ignore
//! use rewards_api::{run_server, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     run_server(&ApiConfig::from_env(), AppState::new()).await
//! }
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::create_router;
pub use server::{create_server, run_server, start_background_server};
pub use state::{ApiConfig, AppState};

/// Crate version reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
