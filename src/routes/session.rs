//! Session blob routes — a single-key JSON store.
//!
//! The blob is a placeholder for real session persistence: one value,
//! overwritten wholesale on each put, last write wins.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// `GET /session` — the stored blob, or `null` if never written.
pub async fn get_blob(State(state): State<AppState>) -> Json<Value> {
    let blob = state.blob.read().await;
    Json(blob.clone().unwrap_or(Value::Null))
}

/// `POST /session` — overwrite the blob and acknowledge.
pub async fn put_blob(State(state): State<AppState>, bytes: Bytes) -> Json<Value> {
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    *state.blob.write().await = Some(value);
    Json(json!({ "ok": true }))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
