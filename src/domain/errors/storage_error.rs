//! Session storage error types.

use thiserror::Error;

/// Session storage error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("failed to access session storage: {0}")]
    AccessFailed(String),

    #[error("failed to read entry `{key}`: {message}")]
    ReadFailed { key: String, message: String },

    #[error("failed to write entry `{key}`: {message}")]
    WriteFailed { key: String, message: String },

    #[error("failed to delete entry `{key}`: {message}")]
    DeleteFailed { key: String, message: String },

    #[error("failed to serialize session data: {0}")]
    Serialization(String),

    #[error("session storage not available: {0}")]
    NotAvailable(String),
}

impl StorageError {
    /// Creates read failure for a key.
    #[must_use]
    pub fn read(key: &str, message: impl Into<String>) -> Self {
        Self::ReadFailed {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Creates write failure for a key.
    #[must_use]
    pub fn write(key: &str, message: impl Into<String>) -> Self {
        Self::WriteFailed {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Creates delete failure for a key.
    #[must_use]
    pub fn delete(key: &str, message: impl Into<String>) -> Self {
        Self::DeleteFailed {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
