//! In-memory result store.
//!
//! Maps generated identifiers to stored scoring results. Records are
//! immutable once saved, there is no update or delete, and everything is
//! lost on restart. The store is an owned object rather than process-global
//! state; share it across handlers behind an `Arc`.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::types::PointsResult;

/// Thread-safe `id -> points` store.
#[derive(Debug, Default)]
pub struct ResultStore {
    results: Mutex<HashMap<String, PointsResult>>,
}

impl ResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a scoring result under a freshly generated identifier.
    ///
    /// Identifiers are random UUID v4 strings, so concurrent saves cannot
    /// collide. Never fails.
    pub fn save(&self, result: PointsResult) -> String {
        let id = Uuid::new_v4().to_string();
        let mut results = self
            .results
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        results.insert(id.clone(), result);
        id
    }

    /// Look up a stored result; `None` for unknown identifiers.
    pub fn get(&self, id: &str) -> Option<PointsResult> {
        let results = self
            .results
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        results.get(id).copied()
    }

    /// Number of stored results.
    pub fn len(&self) -> usize {
        self.results
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether the store holds no results.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
