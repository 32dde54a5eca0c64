//! Durable key-value persistence port.

use crate::domain::errors::StorageError;

/// Synchronous string-keyed persistence used for the session entries.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStoragePort: Send + Sync {
    /// Reads an entry.
    ///
    /// # Errors
    /// Returns error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes an entry, replacing any previous value.
    ///
    /// # Errors
    /// Returns error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes an entry. Removing a missing entry succeeds.
    ///
    /// # Errors
    /// Returns error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
