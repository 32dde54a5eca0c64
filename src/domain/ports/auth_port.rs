//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::Credentials;
use crate::domain::errors::AuthError;

/// Port for the remote credential-based authentication API.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchanges email and password for a user record and session token.
    async fn login(&self, email: &str, password: &str) -> Result<Credentials, AuthError>;

    /// Creates an account and returns its user record and session token.
    async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Credentials, AuthError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;
    use tokio::sync::oneshot;

    use crate::domain::entities::{SessionToken, User};

    type Reply = Result<Credentials, AuthError>;

    enum Scripted {
        Ready(Reply),
        Gated(oneshot::Receiver<Reply>),
    }

    /// Mock authentication port replaying scripted replies in call order.
    pub struct MockAuthPort {
        script: Mutex<VecDeque<Scripted>>,
        fallback: Mutex<Option<Reply>>,
        calls: AtomicUsize,
    }

    impl MockAuthPort {
        /// Creates mock with no scripted replies.
        pub fn new() -> Self {
            Self {
                script: Mutex::new(VecDeque::new()),
                fallback: Mutex::new(None),
                calls: AtomicUsize::new(0),
            }
        }

        /// Creates mock that always accepts with the given user and token.
        pub fn accepting(email: &str, token: &str) -> Self {
            let mock = Self::new();
            mock.set_fallback(Ok(credentials(email, token)));
            mock
        }

        /// Creates mock that always fails with the given error.
        pub fn failing(error: AuthError) -> Self {
            let mock = Self::new();
            mock.set_fallback(Err(error));
            mock
        }

        /// Sets reply used once the script is exhausted.
        pub fn set_fallback(&self, reply: Reply) {
            *self.fallback.lock() = Some(reply);
        }

        /// Queues an immediate reply.
        pub fn push(&self, reply: Reply) {
            self.script.lock().push_back(Scripted::Ready(reply));
        }

        /// Queues a reply that resolves when the returned sender fires.
        pub fn push_gated(&self) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.script.lock().push_back(Scripted::Gated(rx));
            tx
        }

        /// Number of calls received.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        async fn next_reply(&self) -> Reply {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let scripted = self.script.lock().pop_front();
            match scripted {
                Some(Scripted::Ready(reply)) => reply,
                Some(Scripted::Gated(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(AuthError::network("gate dropped"))),
                None => {
                    let fallback = self.fallback.lock().clone();
                    fallback.unwrap_or_else(|| Err(AuthError::unexpected("no scripted reply")))
                }
            }
        }
    }

    /// Builds credentials for tests.
    pub fn credentials(email: &str, token: &str) -> Credentials {
        Credentials::new(
            User::new(1, email),
            SessionToken::new(token).expect("test token must not be blank"),
        )
    }

    #[async_trait]
    impl AuthPort for MockAuthPort {
        async fn login(&self, _email: &str, _password: &str) -> Result<Credentials, AuthError> {
            self.next_reply().await
        }

        async fn register(
            &self,
            _email: &str,
            _password: &str,
            _first_name: &str,
            _last_name: &str,
        ) -> Result<Credentials, AuthError> {
            self.next_reply().await
        }
    }
}
