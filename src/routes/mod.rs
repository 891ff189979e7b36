//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router stands in for every backend the frontend talks to during
//! local development: the mock RPC API (`/api/entities/...`,
//! `/api/functions/...`), the dev auth endpoints, and the single-key session
//! blob store (`/session`). Anything else is a plain-text 404, matching what
//! the real edge deployment answers for unknown paths.

pub mod auth;
pub mod rpc;
pub mod session;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the dev API router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/functions/{name}", post(rpc::invoke_function))
        .route("/api/entities/{entity}/{method}", post(rpc::invoke_entity))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/session", get(session::get_blob).post(session::put_blob))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
#[path = "roundtrip_test.rs"]
mod roundtrip_tests;
