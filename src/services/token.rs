//! Dev-only bearer token scheme.
//!
//! Tokens are `devtoken:<email>` — opaque markers for local development,
//! not signed credentials. The server never verifies them; the embedded
//! email is simply read back out to synthesize a user.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

const TOKEN_PREFIX: &str = "devtoken";

/// Display name assigned to every synthetic dev user.
pub const DEV_USER_NAME: &str = "Dev User";

/// Email used when a token carries no email segment.
pub const FALLBACK_EMAIL: &str = "dev@example.com";

/// Issue a dev token for the given email.
#[must_use]
pub fn issue(email: &str) -> String {
    format!("{TOKEN_PREFIX}:{email}")
}

/// Recover the email embedded in a dev token: split on `:`, take the
/// second segment, fall back to [`FALLBACK_EMAIL`] when absent or empty.
#[must_use]
pub fn email_from_token(token: &str) -> String {
    token
        .split(':')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .unwrap_or(FALLBACK_EMAIL)
        .to_owned()
}

/// Extract the raw token from the `Authorization` header. A `Bearer `
/// prefix is stripped when present; any other header value is taken as-is,
/// matching the dev backend's lenient contract.
#[must_use]
pub fn bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    Some(value.strip_prefix("Bearer ").unwrap_or(value))
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
