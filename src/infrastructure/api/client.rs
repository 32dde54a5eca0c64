//! Authentication API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

use super::dto::{AuthEnvelope, ErrorResponse, LoginBody, RegisterBody};
use crate::domain::entities::{Credentials, SessionToken};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Default API root, matching the backend's development server.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("hinge-shell/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed [`AuthPort`].
pub struct HttpAuthClient {
    client: Client,
    base_url: String,
}

impl HttpAuthClient {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, AuthError> {
        Self::with_base_url(DEFAULT_API_URL, DEFAULT_TIMEOUT)
    }

    /// Creates client with custom base URL and request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AuthError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the API root without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_auth<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Credentials, AuthError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "Sending authentication request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach authentication API");
                if e.is_timeout() {
                    AuthError::network("request timed out")
                } else if e.is_connect() {
                    AuthError::network("failed to connect to authentication API")
                } else {
                    AuthError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let envelope: AuthEnvelope = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse authentication response");
            AuthError::invalid_response(format!("failed to parse response: {e}"))
        })?;
        let payload = envelope.into_inner();

        let token = SessionToken::new(payload.token)
            .ok_or_else(|| AuthError::invalid_response("response carried an empty token"))?;

        debug!(user_id = %payload.user.id(), "Authentication accepted");
        Ok(Credentials::new(payload.user, token))
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> AuthError {
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(ErrorResponse::into_message);

        warn!(%status, message = message.as_deref().unwrap_or("-"), "Authentication API returned an error");
        AuthError::rejected(status.as_u16(), message)
    }
}

#[async_trait]
impl AuthPort for HttpAuthClient {
    async fn login(&self, email: &str, password: &str) -> Result<Credentials, AuthError> {
        self.post_auth("/auth/login", &LoginBody { email, password })
            .await
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Credentials, AuthError> {
        let body = RegisterBody {
            email,
            password,
            first_name,
            last_name,
        };
        self.post_auth("/auth/register", &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> HttpAuthClient {
        HttpAuthClient::with_base_url(format!("{}/api/v1/", server.uri()), Duration::from_secs(5))
            .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = HttpAuthClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
    }

    #[tokio::test]
    async fn test_login_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .and(body_json(json!({"email": "a@b.com", "password": "hunter22"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "dummy-token",
                "user": {"id": 1, "email": "a@b.com", "created_at": "2025-03-01T10:00:00Z"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let credentials = client_for(&server).await.login("a@b.com", "hunter22").await.unwrap();

        assert_eq!(credentials.token().as_str(), "dummy-token");
        assert_eq!(credentials.user().email(), "a@b.com");
    }

    #[tokio::test]
    async fn test_register_sends_camel_case_and_accepts_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/register"))
            .and(body_json(json!({
                "email": "a@b.com",
                "password": "hunter22",
                "firstName": "Ada",
                "lastName": "Lovelace"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "status": "success",
                "data": {"token": "fresh-token", "user": {"id": "u-9", "email": "a@b.com"}}
            })))
            .mount(&server)
            .await;

        let credentials = client_for(&server)
            .await
            .register("a@b.com", "hunter22", "Ada", "Lovelace")
            .await
            .unwrap();

        assert_eq!(credentials.user().id().as_str(), "u-9");
        assert_eq!(credentials.token().as_str(), "fresh-token");
    }

    #[tokio::test]
    async fn test_unauthorized_carries_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let error = client_for(&server).await.login("a@b.com", "wrong").await.unwrap_err();

        assert!(error.is_unauthorized());
        assert_eq!(error.server_message(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_backend_error_envelope_is_read() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/register"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"status": "error", "error": "user already exists"})),
            )
            .mount(&server)
            .await;

        let error = client_for(&server)
            .await
            .register("a@b.com", "hunter22", "Ada", "Lovelace")
            .await
            .unwrap_err();

        assert_eq!(error.server_message(), Some("user already exists"));
    }

    #[tokio::test]
    async fn test_non_json_error_has_no_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let error = client_for(&server).await.login("a@b.com", "x").await.unwrap_err();

        assert_eq!(error, AuthError::rejected(502, None));
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "t"})))
            .mount(&server)
            .await;

        let error = client_for(&server).await.login("a@b.com", "x").await.unwrap_err();

        assert!(matches!(error, AuthError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_blank_token_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "  ",
                "user": {"id": 1, "email": "a@b.com"}
            })))
            .mount(&server)
            .await;

        let error = client_for(&server).await.login("a@b.com", "x").await.unwrap_err();

        assert!(matches!(error, AuthError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let client =
            HttpAuthClient::with_base_url(format!("http://{address}"), Duration::from_secs(2))
                .unwrap();
        let error = client.login("a@b.com", "x").await.unwrap_err();

        assert!(error.is_network_error());
        assert_eq!(error.server_message(), None);
    }
}
