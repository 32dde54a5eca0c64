//! TOML file session storage.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

/// Name of the session file inside the data directory.
pub const SESSION_FILE_NAME: &str = "session.toml";

type Entries = BTreeMap<String, String>;

/// Key-value storage backed by one TOML file, rewritten atomically.
pub struct FileSessionStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStorage {
    /// Creates storage at the given file path. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self, key: &str) -> Result<Entries, StorageError> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| StorageError::read(key, e.to_string()))?;

        match toml::from_str::<Entries>(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session file is malformed, treating as empty");
                Ok(Entries::new())
            }
        }
    }

    fn save(&self, key: &str, entries: &Entries) -> Result<(), StorageError> {
        let content =
            toml::to_string(entries).map_err(|e| StorageError::Serialization(e.to_string()))?;

        let parent = self
            .path
            .parent()
            .ok_or_else(|| StorageError::AccessFailed("session path has no parent".to_string()))?;
        fs::create_dir_all(parent).map_err(|e| StorageError::write(key, e.to_string()))?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| StorageError::write(key, e.to_string()))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| StorageError::write(key, e.to_string()))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| StorageError::write(key, e.error.to_string()))?;

        Ok(())
    }
}

impl SessionStoragePort for FileSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load(key)?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        let mut entries = self.load(key)?;
        entries.insert(key.to_string(), value.to_string());
        self.save(key, &entries)?;
        debug!(key, path = %self.path.display(), "Session entry written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        let mut entries = self.load(key)?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(key, &entries)
            .map_err(|e| StorageError::delete(key, e.to_string()))?;
        debug!(key, path = %self.path.display(), "Session entry removed");
        Ok(())
    }
}
