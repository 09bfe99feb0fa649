//! Rewards API handlers.

pub mod health;
pub mod receipt;

pub use health::*;
pub use receipt::*;
