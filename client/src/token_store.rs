//! Bearer-token persistence.
//!
//! The browser app kept its session token in a single localStorage slot;
//! the SDK equivalent is one token under one well-known path. Storage
//! failures are explicit `Result`s rather than silently swallowed reads.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Environment override for the token file location; used by tests and
/// sandboxed environments without a home directory.
pub const TOKEN_PATH_ENV: &str = "BOUNCIEHOUSE_TOKEN_PATH";

const TOKEN_DIR: &str = ".bounciehouse";
const TOKEN_FILE: &str = "session-token";

#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    #[error("token store unavailable: {0}")]
    Unavailable(String),
    #[error("token store io: {0}")]
    Io(#[from] io::Error),
}

/// One token under one well-known key. No expiry, rotation, or revocation:
/// the token is created on login, read on every outgoing request, and
/// deleted on logout.
pub trait TokenStore: Send + Sync {
    /// Read the stored token. `Ok(None)` when nothing has been saved.
    fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// Persist the token, overwriting any previous value.
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Remove the stored token. Clearing an absent token is not an error.
    fn clear(&self) -> Result<(), TokenStoreError>;
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// Process-local store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// Single-file store, by default `~/.bounciehouse/session-token`.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store at the default location, honoring the [`TOKEN_PATH_ENV`]
    /// override.
    pub fn from_env() -> Result<Self, TokenStoreError> {
        if let Ok(path) = std::env::var(TOKEN_PATH_ENV) {
            return Ok(Self::at(path));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| TokenStoreError::Unavailable("no home directory".to_owned()))?;
        Ok(Self::at(home.join(TOKEN_DIR).join(TOKEN_FILE)))
    }

    /// Store at an explicit path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_owned()))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "token_store_test.rs"]
mod tests;
