//! Dev auth routes.
//!
//! DESIGN
//! ======
//! This is a development stub, not an authentication system: any non-empty
//! email/password pair logs in, and `me` trusts whatever token the caller
//! presents. A production deployment replaces these routes with real
//! credential verification and opaque session tokens.

use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::services::token;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /api/auth/login` — issue a dev token for any non-empty credentials.
pub async fn login(body: Option<Json<LoginRequest>>) -> Response {
    let Some(Json(req)) = body else {
        return invalid_credentials();
    };
    if req.email.is_empty() || req.password.is_empty() {
        return invalid_credentials();
    }

    let issued = token::issue(&req.email);
    tracing::info!(email = %req.email, "dev login");
    Json(json!({
        "token": issued,
        "user": { "email": req.email, "name": token::DEV_USER_NAME },
    }))
    .into_response()
}

/// `GET /api/auth/me` — resolve the bearer token to a synthetic dev user.
/// No Authorization header means anonymous: the body is JSON `null`.
pub async fn me(headers: HeaderMap) -> Json<Value> {
    let Some(raw) = token::bearer(&headers) else {
        return Json(Value::Null);
    };

    let email = token::email_from_token(raw);
    Json(json!({ "email": email, "name": token::DEV_USER_NAME }))
}

fn invalid_credentials() -> Response {
    (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
