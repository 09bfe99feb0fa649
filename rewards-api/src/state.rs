//! Application state and configuration.

use std::sync::Arc;

use rewards_core::ResultStore;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Result store
    pub store: Arc<ResultStore>,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create new app state with an empty store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(ResultStore::new()),
            version: crate::VERSION.to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            enable_cors: true,
        }
    }
}

impl ApiConfig {
    /// Build configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `REWARDS_API_HOST`, `REWARDS_API_PORT`,
    /// `REWARDS_API_CORS` (`0`/`false` to disable).
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: std::env::var("REWARDS_API_HOST").unwrap_or(defaults.host),
            port: std::env::var("REWARDS_API_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            enable_cors: std::env::var("REWARDS_API_CORS")
                .map(|value| !matches!(value.to_lowercase().as_str(), "0" | "false"))
                .unwrap_or(defaults.enable_cors),
        }
    }
}
