//! Session state entity.

use super::{SessionToken, User};

/// Authenticated identity: the user record and its token, always held together.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    user: User,
    token: SessionToken,
}

impl Credentials {
    /// Pairs a user record with its token.
    #[must_use]
    pub const fn new(user: User, token: SessionToken) -> Self {
        Self { user, token }
    }

    /// Returns the user record.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Returns the session token.
    #[must_use]
    pub const fn token(&self) -> &SessionToken {
        &self.token
    }
}

/// In-memory authentication state.
///
/// Only [`crate::application::SessionStore`] mutates a session; everything else
/// receives clones or reads through the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    credentials: Option<Credentials>,
    loading: bool,
    error: Option<String>,
}

impl Session {
    /// Creates an empty, unauthenticated session.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a session holding the given credentials.
    #[must_use]
    pub fn authenticated(credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
            ..Self::default()
        }
    }

    /// True if and only if a token is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Returns the credentials when signed in.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the signed-in user.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match &self.credentials {
            Some(credentials) => Some(&credentials.user),
            None => None,
        }
    }

    /// Returns the session token.
    #[must_use]
    pub const fn token(&self) -> Option<&SessionToken> {
        match &self.credentials {
            Some(credentials) => Some(&credentials.token),
            None => None,
        }
    }

    /// Whether a login or register call is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the message left by the latest failed call.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn finish_request(&mut self) {
        self.loading = false;
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub(crate) fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    pub(crate) fn clear_credentials(&mut self) {
        self.credentials = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new(
            User::new(1, "a@b.com"),
            SessionToken::new("dummy-token").unwrap(),
        )
    }

    #[test]
    fn test_empty_session_is_unauthenticated() {
        let session = Session::empty();

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(!session.is_loading());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_user_and_token_move_together() {
        let mut session = Session::empty();

        session.set_credentials(credentials());
        assert!(session.user().is_some() && session.token().is_some());

        session.clear_credentials();
        assert!(session.user().is_none() && session.token().is_none());
    }

    #[test]
    fn test_begin_request_clears_previous_error() {
        let mut session = Session::empty();
        session.set_error("Login failed");

        session.begin_request();

        assert!(session.is_loading());
        assert!(session.error().is_none());
    }
}
