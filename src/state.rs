//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The only shared mutable value is the session blob: a single JSON slot
//! overwritten wholesale on each write. Last write wins; there is no
//! versioning, merging, or multi-key support.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

/// Shared application state. Clone is required by Axum — inner fields are
/// Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    /// Session blob slot. `None` until the first put.
    pub blob: Arc<RwLock<Option<Value>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
