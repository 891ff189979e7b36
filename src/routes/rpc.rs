//! Mock RPC routes — echo any entity or function call back to the caller.
//!
//! No schema validation happens here: arbitrary JSON shapes pass through
//! unchanged so frontend code can be exercised before a real backend
//! exists. Missing or malformed bodies echo as JSON `null`.

use axum::Json;
use axum::body::Bytes;
use axum::extract::Path;
use serde_json::{Value, json};

fn parse_body(bytes: &Bytes) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes).unwrap_or(Value::Null)
}

/// `POST /api/functions/{name}` — echo a function invocation.
pub async fn invoke_function(Path(name): Path<String>, bytes: Bytes) -> Json<Value> {
    let args = parse_body(&bytes);
    tracing::debug!(function = %name, "mock function call");
    Json(json!({ "ok": true, "function": name, "args": args }))
}

/// `POST /api/entities/{entity}/{method}` — echo an entity method call.
pub async fn invoke_entity(
    Path((entity, method)): Path<(String, String)>,
    bytes: Bytes,
) -> Json<Value> {
    let body = parse_body(&bytes);
    tracing::debug!(%entity, %method, "mock entity call");
    Json(json!({ "ok": true, "entity": entity, "method": method, "body": body }))
}

#[cfg(test)]
#[path = "rpc_test.rs"]
mod tests;
