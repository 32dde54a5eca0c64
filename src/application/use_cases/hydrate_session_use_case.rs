//! Session hydration use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Credentials, SessionToken, User};
use crate::domain::ports::SessionStoragePort;

/// Storage key holding the serialized user record.
pub const USER_KEY: &str = "user";
/// Storage key holding the raw session token.
pub const TOKEN_KEY: &str = "user-token";

/// Why hydration produced no credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationMiss {
    /// Neither entry exists.
    Empty,
    /// Only one of the two entries exists.
    Incomplete,
    /// The user record or token could not be parsed.
    Malformed,
    /// The backend could not be read.
    Unreadable,
}

/// Rebuilds credentials from durable storage at startup.
pub struct HydrateSessionUseCase {
    storage_port: Arc<dyn SessionStoragePort>,
}

impl HydrateSessionUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(storage_port: Arc<dyn SessionStoragePort>) -> Self {
        Self { storage_port }
    }

    /// Reads both entries once and returns credentials only when the pair is
    /// complete and well formed. Broken leftovers are removed.
    ///
    /// # Errors
    /// Returns the reason no session could be restored.
    pub fn execute(&self) -> Result<Credentials, HydrationMiss> {
        let user = self.read(USER_KEY)?;
        let token = self.read(TOKEN_KEY)?;

        let (raw_user, raw_token) = match (user, token) {
            (Some(user), Some(token)) => (user, token),
            (None, None) => {
                debug!("No persisted session");
                return Err(HydrationMiss::Empty);
            }
            _ => {
                warn!("Persisted session is incomplete, discarding");
                self.purge();
                return Err(HydrationMiss::Incomplete);
            }
        };

        let Some(token) = SessionToken::new(raw_token) else {
            warn!("Persisted token is blank, discarding session");
            self.purge();
            return Err(HydrationMiss::Malformed);
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => {
                info!(user_id = %user.id(), token = %token, "Session restored from storage");
                Ok(Credentials::new(user, token))
            }
            Err(e) => {
                warn!(error = %e, "Persisted user record is malformed, discarding session");
                self.purge();
                Err(HydrationMiss::Malformed)
            }
        }
    }

    fn read(&self, key: &str) -> Result<Option<String>, HydrationMiss> {
        self.storage_port.get(key).map_err(|e| {
            warn!(key, error = %e, "Failed to read persisted session");
            HydrationMiss::Unreadable
        })
    }

    fn purge(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage_port.remove(key) {
                warn!(key, error = %e, "Failed to remove stale session entry");
            }
        }
    }
}
