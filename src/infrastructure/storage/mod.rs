//! Session storage adapters.

mod file_storage;
#[cfg(feature = "keyring")]
mod keyring_storage;
#[cfg(not(feature = "keyring"))]
mod keyring_storage_stub;
mod memory_storage;

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::ports::SessionStoragePort;

pub use file_storage::{FileSessionStorage, SESSION_FILE_NAME};
#[cfg(feature = "keyring")]
pub use keyring_storage::KeyringSessionStorage;
#[cfg(not(feature = "keyring"))]
pub use keyring_storage_stub::KeyringSessionStorage;
pub use memory_storage::MemorySessionStorage;

/// Selectable persistence backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// TOML file in the data directory.
    #[default]
    File,
    /// System keyring.
    Keyring,
    /// Nothing survives the process.
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Keyring => write!(f, "keyring"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Opens the configured backend. `file_path` is only used by [`StorageBackend::File`].
#[must_use]
pub fn open_storage(backend: StorageBackend, file_path: PathBuf) -> Arc<dyn SessionStoragePort> {
    info!(%backend, "Opening session storage");
    match backend {
        StorageBackend::File => Arc::new(FileSessionStorage::new(file_path)),
        StorageBackend::Keyring => Arc::new(KeyringSessionStorage::new()),
        StorageBackend::Memory => Arc::new(MemorySessionStorage::new()),
    }
}
