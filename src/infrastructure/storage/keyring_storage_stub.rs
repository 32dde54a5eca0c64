//! Stub keyring storage for builds without keyring support.

use tracing::debug;

use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

/// Keyring stand-in that holds nothing and refuses writes.
pub struct KeyringSessionStorage;

impl KeyringSessionStorage {
    /// Creates new stub storage.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Creates storage with a custom service name (no-op in stub).
    #[must_use]
    pub fn with_service(_service: impl Into<String>) -> Self {
        Self
    }
}

impl Default for KeyringSessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStoragePort for KeyringSessionStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        debug!("Keyring feature disabled - no session stored");
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::NotAvailable(
            "built without the `keyring` feature".to_string(),
        ))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        debug!("Keyring feature disabled - nothing to delete");
        Ok(())
    }
}
