//! Persisted credential storage.
//!
//! DESIGN
//! ======
//! Durable state is exactly one opaque bearer string under one fixed key
//! (a file named `token`). The session manager is the only writer; a token
//! survives restarts and is deleted on logout or failed validation.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

const TOKEN_FILE_NAME: &str = "token";

#[derive(Debug, thiserror::Error)]
#[error("credential store error: {0}")]
pub struct StoreError(pub String);

/// Durable client-local storage for the bearer credential.
pub trait CredentialStore {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persist the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the token cannot be written.
    fn save(&self, token: &str) -> Result<(), StoreError>;
    /// Delete the persisted token. Succeeds when none was stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if an existing token cannot be removed.
    fn clear(&self) -> Result<(), StoreError>;
}

// =============================================================================
// FILE STORE
// =============================================================================

/// File-backed store: a single `token` file inside the configured directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE_NAME)
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(self.token_path())
            .ok()
            .map(|raw| raw.trim().to_owned())
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError(format!("mkdir {}: {e}", self.dir.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }

        let path = self.token_path();
        fs::write(&path, token).map_err(|e| StoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| StoreError(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let path = self.token_path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| StoreError(format!("remove {}: {e}", path.display())))?;
        }
        Ok(())
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory store for tests and hosts that manage their own persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.lock().map(|guard| guard.clone()).unwrap_or(None)
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        let mut guard = self.token.lock().map_err(|_| StoreError("lock poisoned".into()))?;
        *guard = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.token.lock().map_err(|_| StoreError("lock poisoned".into()))?;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
