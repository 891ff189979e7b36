//! Generic API proxy.
//!
//! The backend exposes every operation as `POST /api/<namespace>/<method>`
//! with a JSON body. `call` is the one code path for all of them; the
//! namespace handles below put explicit names on the two namespaces the
//! app actually uses.

use serde_json::{Map, Value};

use crate::auth::AuthHandle;
use crate::session::SessionContext;
use crate::token_store::TokenStoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx API response, carrying the raw body text.
    #[error("{namespace}/{method} failed with HTTP {status}: {body}")]
    Status {
        namespace: String,
        method: String,
        status: u16,
        body: String,
    },
    /// Network-level failure. Not retried.
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// 2xx response that claimed JSON but did not parse as such.
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Token store failure while persisting a session change.
    #[error(transparent)]
    Store(#[from] TokenStoreError),
}

/// Parsed response body: JSON when the server says so, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Json(Value),
    Text(String),
}

impl ApiPayload {
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Fold into a single JSON value; text bodies become JSON strings.
    #[must_use]
    pub fn into_json(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }
}

/// HTTP client for the BouncieHouse API. Cheap to clone via its inner
/// connection pool; shares its [`SessionContext`] with every handle.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    /// Client against `base_url` (scheme + authority, trailing slash
    /// tolerated) using the given session.
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            session,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// One fire-once `POST /api/<namespace>/<method>`.
    ///
    /// The body is the JSON encoding of `params`, or `{}` when the caller
    /// passes none. A bearer token is attached iff the session holds one.
    /// 2xx responses parse as JSON when the `Content-Type` says so and fall
    /// back to raw text otherwise; anything else is [`ApiError::Status`].
    pub async fn call(
        &self,
        namespace: &str,
        method: &str,
        params: Option<Value>,
    ) -> Result<ApiPayload, ApiError> {
        let url = format!("{}/api/{namespace}/{method}", self.base_url);
        let body = params.unwrap_or_else(|| Value::Object(Map::new()));
        tracing::debug!(%namespace, %method, "api call");

        let mut request = self.http.post(&url).json(&body);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                namespace: namespace.to_owned(),
                method: method.to_owned(),
                status: status.as_u16(),
                body: text,
            });
        }

        if is_json {
            Ok(ApiPayload::Json(serde_json::from_str(&text)?))
        } else {
            Ok(ApiPayload::Text(text))
        }
    }

    /// Handle for one named entity, e.g. `client.entity("Listing")`.
    #[must_use]
    pub fn entity(&self, name: impl Into<String>) -> EntityHandle<'_> {
        EntityHandle {
            client: self,
            name: name.into(),
        }
    }

    /// Handle for the flat `functions` namespace.
    #[must_use]
    pub fn functions(&self) -> FunctionsHandle<'_> {
        FunctionsHandle { client: self }
    }

    /// Handle for the auth endpoints and session transitions.
    #[must_use]
    pub fn auth(&self) -> AuthHandle<'_> {
        AuthHandle::new(self)
    }
}

/// Calls under `entities/<Name>`: `invoke("filter", ...)` maps to
/// `POST /api/entities/<Name>/filter`.
pub struct EntityHandle<'a> {
    client: &'a ApiClient,
    name: String,
}

impl EntityHandle<'_> {
    pub async fn invoke(&self, method: &str, params: Option<Value>) -> Result<ApiPayload, ApiError> {
        let namespace = format!("entities/{}", self.name);
        self.client.call(&namespace, method, params).await
    }
}

/// Calls under the flat `functions` namespace: `invoke("sendEmail", ...)`
/// maps to `POST /api/functions/sendEmail`.
pub struct FunctionsHandle<'a> {
    client: &'a ApiClient,
}

impl FunctionsHandle<'_> {
    pub async fn invoke(&self, name: &str, params: Option<Value>) -> Result<ApiPayload, ApiError> {
        self.client.call("functions", name, params).await
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
