//! Auth session operations — login, me, logout, out-of-band tokens.
//!
//! ERROR HANDLING
//! ==============
//! `me` treats any non-2xx as "no user" and never fails on auth grounds;
//! `login` surfaces non-2xx as [`ApiError::Status`] so the caller can show
//! the backend's message. Only transport, decode, and token-store failures
//! are errors on the `me` path.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{ApiClient, ApiError};
use crate::token_store::TokenStoreError;

/// Authenticated user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Full login payload. The token is installed into the session when
/// present; the rest is returned to the caller untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Borrowed view over an [`ApiClient`] exposing the auth endpoints.
pub struct AuthHandle<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthHandle<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/auth/me` with the session token attached if present.
    /// Non-2xx and JSON `null` both resolve to `Ok(None)`.
    pub async fn me(&self) -> Result<Option<User>, ApiError> {
        let url = format!("{}/api/auth/me", self.client.base_url());
        let mut request = self.client.http().get(&url);
        if let Some(token) = self.client.session().token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let value = response.json::<Value>().await?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value)?))
    }

    /// `POST /api/auth/login`. On 2xx the returned token (when present) is
    /// installed into the session and persisted; the session stays
    /// anonymous on any failure.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/api/auth/login", self.client.base_url());
        let response = self
            .client
            .http()
            .post(&url)
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                namespace: "auth".to_owned(),
                method: "login".to_owned(),
                status: status.as_u16(),
                body,
            });
        }

        let payload = response.json::<LoginResponse>().await?;
        if let Some(token) = payload.token.as_deref() {
            self.client.session().set_token(token, true)?;
            tracing::debug!("session authenticated");
        }
        Ok(payload)
    }

    /// Clear the session token unconditionally. The optional redirect
    /// target is handed back for the caller to navigate to — the SDK
    /// performs no navigation itself.
    pub fn logout(&self, redirect_url: Option<&str>) -> Result<Option<String>, TokenStoreError> {
        self.client.session().clear()?;
        Ok(redirect_url.map(ToOwned::to_owned))
    }

    /// Out-of-band token injection for externally issued tokens. Persists
    /// only when `save` is true and the token is non-empty.
    pub fn set_token(&self, token: &str, save: bool) -> Result<(), TokenStoreError> {
        self.client.session().set_token(token, save)
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
