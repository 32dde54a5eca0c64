//! Authoritative owner of the authentication session.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

use crate::application::dto::{AuthOperation, LoginRequest, RegisterRequest};
use crate::application::use_cases::{HydrateSessionUseCase, TOKEN_KEY, USER_KEY};
use crate::domain::entities::{Credentials, Session, SessionToken, User};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthPort, SessionReader, SessionStoragePort};

/// Longest time a guard read waits for the session lock.
const READ_TIMEOUT: Duration = Duration::from_millis(250);

struct StoreState {
    session: Session,
    /// Id of the most recent login/register/logout intent.
    latest_request: u64,
}

/// Owns the session and is the only writer of the persisted session entries.
///
/// Every login or register call is tagged with a request id; a response whose
/// id is no longer the latest leaves the session untouched and resolves to
/// [`AuthError::Superseded`]. Logout also takes a new id, so a response that
/// arrives after logout cannot sign the user back in.
///
/// Storage I/O never runs under the session lock, so guard reads are not held
/// up by a slow backend. Writes and removals of the persisted pair are
/// serialized by `persist_lock` instead.
pub struct SessionStore {
    auth_port: Arc<dyn AuthPort>,
    storage_port: Arc<dyn SessionStoragePort>,
    state: RwLock<StoreState>,
    persist_lock: Mutex<()>,
}

impl SessionStore {
    /// Creates store with an empty session.
    #[must_use]
    pub fn new(auth_port: Arc<dyn AuthPort>, storage_port: Arc<dyn SessionStoragePort>) -> Self {
        Self {
            auth_port,
            storage_port,
            state: RwLock::new(StoreState {
                session: Session::empty(),
                latest_request: 0,
            }),
            persist_lock: Mutex::new(()),
        }
    }

    /// Creates store and synchronously restores any persisted session.
    #[must_use]
    pub fn hydrated(
        auth_port: Arc<dyn AuthPort>,
        storage_port: Arc<dyn SessionStoragePort>,
    ) -> Self {
        let store = Self::new(auth_port, storage_port);
        store.hydrate();
        store
    }

    /// Replaces in-memory state with what durable storage holds.
    pub fn hydrate(&self) {
        let session = match HydrateSessionUseCase::new(Arc::clone(&self.storage_port)).execute() {
            Ok(credentials) => Session::authenticated(credentials),
            Err(miss) => {
                debug!(?miss, "Starting with empty session");
                Session::empty()
            }
        };
        self.state.write().session = session;
    }

    /// Authenticates with email and password.
    ///
    /// # Errors
    /// Returns the API failure; the session `error` then holds a display
    /// message. Returns [`AuthError::Superseded`] if a newer attempt replaced
    /// this one.
    pub async fn login(&self, request: LoginRequest) -> Result<User, AuthError> {
        let call = self.auth_port.login(&request.email, &request.password);
        self.authenticate(AuthOperation::Login, call).await
    }

    /// Creates an account and signs in with it.
    ///
    /// # Errors
    /// Same contract as [`Self::login`].
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AuthError> {
        let call = self.auth_port.register(
            &request.email,
            &request.password,
            &request.first_name,
            &request.last_name,
        );
        self.authenticate(AuthOperation::Register, call).await
    }

    /// Drops the session locally and removes both persisted entries.
    ///
    /// The server is not contacted; the token is not revoked.
    pub fn logout(&self) {
        {
            let mut state = self.state.write();
            state.latest_request += 1;
            state.session.clear_credentials();
            state.session.finish_request();
        }

        let _io = self.persist_lock.lock();
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage_port.remove(key) {
                error!(key, error = %e, "Failed to remove persisted session entry");
            }
        }
        info!("Logged out");
    }

    /// True if and only if a session token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.read().session.is_authenticated()
    }

    /// Returns a copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.read().session.clone()
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.read().session.user().cloned()
    }

    /// Returns the session token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SessionToken> {
        self.state.read().session.token().cloned()
    }

    /// Whether the latest login or register call is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.read().session.is_loading()
    }

    /// Returns the message left by the latest failed call.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.read().session.error().map(ToString::to_string)
    }

    async fn authenticate<F>(&self, operation: AuthOperation, call: F) -> Result<User, AuthError>
    where
        F: Future<Output = Result<Credentials, AuthError>>,
    {
        let request_id = {
            let mut state = self.state.write();
            state.latest_request += 1;
            state.session.begin_request();
            state.latest_request
        };
        let _loading = LoadingGuard {
            store: self,
            request_id,
        };

        debug!(%operation, request_id, "Authentication request started");
        let result = call.await;
        self.settle(operation, request_id, result)
    }

    fn settle(
        &self,
        operation: AuthOperation,
        request_id: u64,
        result: Result<Credentials, AuthError>,
    ) -> Result<User, AuthError> {
        let credentials = match result {
            Ok(credentials) => credentials,
            Err(e) => {
                let mut state = self.state.write();
                if state.latest_request != request_id {
                    debug!(%operation, request_id, latest = state.latest_request, "Discarding stale failure");
                    return Err(AuthError::Superseded);
                }
                let message = e
                    .server_message()
                    .unwrap_or_else(|| operation.fallback_message());
                warn!(%operation, error = %e, "Authentication failed");
                state.session.set_error(message);
                return Err(e);
            }
        };

        let _io = self.persist_lock.lock();
        if !self.is_latest(request_id) {
            debug!(%operation, request_id, "Discarding stale response");
            return Err(AuthError::Superseded);
        }

        self.persist(&credentials);

        let mut state = self.state.write();
        if state.latest_request != request_id {
            // Superseded while writing: the entries belong to no live session.
            drop(state);
            debug!(%operation, request_id, "Response superseded during persistence");
            self.discard_persisted();
            return Err(AuthError::Superseded);
        }

        let user = credentials.user().clone();
        info!(%operation, user_id = %user.id(), token = %credentials.token(), "Authenticated");
        state.session.set_credentials(credentials);
        Ok(user)
    }

    fn is_latest(&self, request_id: u64) -> bool {
        self.state.read().latest_request == request_id
    }

    /// Writes both entries or neither; failures are logged, never raised.
    fn persist(&self, credentials: &Credentials) {
        let user_json = match serde_json::to_string(credentials.user()) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to serialize user record, session not persisted");
                self.discard_persisted();
                return;
            }
        };

        let written = self
            .storage_port
            .set(USER_KEY, &user_json)
            .and_then(|()| self.storage_port.set(TOKEN_KEY, credentials.token().as_str()));

        if let Err(e) = written {
            error!(error = %e, "Failed to persist session, keeping it in memory only");
            self.discard_persisted();
        }
    }

    fn discard_persisted(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage_port.remove(key) {
                warn!(key, error = %e, "Failed to clear persisted session entry");
            }
        }
    }
}

impl SessionReader for SessionStore {
    fn is_authenticated(&self) -> Option<bool> {
        self.state
            .try_read_for(READ_TIMEOUT)
            .map(|state| state.session.is_authenticated())
    }
}

/// Clears `loading` when the request that set it is still the latest,
/// including when the pending future is dropped.
struct LoadingGuard<'a> {
    store: &'a SessionStore,
    request_id: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.store.state.write();
        if state.latest_request == self.request_id {
            state.session.finish_request();
        }
    }
}
