//! Explicit session context.
//!
//! DESIGN
//! ======
//! The browser app read its token from ambient storage wherever it pleased;
//! here the session is a value constructed once and handed to whatever
//! issues authenticated calls. The in-memory token is the source of truth
//! for outgoing requests; the store is consulted only on restore and
//! written through on changes.

use std::sync::{Arc, PoisonError, RwLock};

use crate::token_store::{MemoryTokenStore, TokenStore, TokenStoreError};

/// Two states: anonymous (no token) and authenticated (token held).
/// Clone shares the same underlying token and store.
#[derive(Clone)]
pub struct SessionContext {
    token: Arc<RwLock<Option<String>>>,
    store: Arc<dyn TokenStore>,
}

impl SessionContext {
    /// Fresh anonymous session over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
            store,
        }
    }

    /// In-memory session with no persistence beyond the process.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Session restored from the store's persisted token, if any.
    pub fn restore(store: Arc<dyn TokenStore>) -> Result<Self, TokenStoreError> {
        let token = store.load()?;
        Ok(Self {
            token: Arc::new(RwLock::new(token)),
            store,
        })
    }

    /// Current bearer token, if authenticated.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Install a token, writing it through to the store when `save` is
    /// true. Empty tokens are ignored.
    pub fn set_token(&self, token: &str, save: bool) -> Result<(), TokenStoreError> {
        if token.is_empty() {
            return Ok(());
        }
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        if save {
            self.store.save(token)?;
        }
        Ok(())
    }

    /// Drop the token from memory and the store.
    pub fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.store.clear()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
