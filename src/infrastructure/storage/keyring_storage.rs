//! Keyring-based session storage.

use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

const KEYRING_SERVICE: &str = "hinge-shell";

/// System keyring adapter; each key is stored as its own credential.
pub struct KeyringSessionStorage {
    service: String,
}

impl KeyringSessionStorage {
    /// Creates storage with the default service name.
    #[must_use]
    pub fn new() -> Self {
        Self::with_service(KEYRING_SERVICE)
    }

    /// Creates storage under a custom service name.
    #[must_use]
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, StorageError> {
        Entry::new(&self.service, key)
            .map_err(|e| StorageError::AccessFailed(format!("failed to access keyring: {e}")))
    }
}

impl Default for KeyringSessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStoragePort for KeyringSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        debug!(service = %self.service, key, "Reading keyring entry");

        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => {
                warn!(key, error = %e, "Failed to read keyring entry");
                Err(StorageError::read(key, e.to_string()))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        debug!(service = %self.service, key, "Writing keyring entry");

        self.entry(key)?.set_password(value).map_err(|e| {
            warn!(key, error = %e, "Failed to write keyring entry");
            StorageError::write(key, e.to_string())
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        debug!(service = %self.service, key, "Deleting keyring entry");

        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                warn!(key, error = %e, "Failed to delete keyring entry");
                Err(StorageError::delete(key, e.to_string()))
            }
        }
    }
}
