//! BouncieHouse client SDK — API proxy and auth session management.
//!
//! ARCHITECTURE
//! ============
//! Every backend operation is a single `POST /api/<namespace>/<method>`
//! carrying a JSON body. [`ApiClient`] owns the HTTP transport and a
//! [`SessionContext`] holding the bearer token; namespace handles
//! ([`EntityHandle`], [`FunctionsHandle`], [`AuthHandle`]) are thin explicit
//! wrappers over the generic call — no runtime reflection or dynamic
//! dispatch on method names.
//!
//! TRADE-OFFS
//! ==========
//! Calls are fire-once: no retries, timeouts, or batching. Token storage
//! errors are surfaced as `Result`s instead of being swallowed, so callers
//! decide what an unavailable store means for them.

pub mod api;
pub mod auth;
pub mod session;
pub mod token_store;

pub use api::{ApiClient, ApiError, ApiPayload, EntityHandle, FunctionsHandle};
pub use auth::{AuthHandle, LoginCredentials, LoginResponse, User};
pub use session::SessionContext;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TokenStoreError};
