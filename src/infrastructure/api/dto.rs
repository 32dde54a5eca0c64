use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// `POST /auth/login` body.
#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /auth/register` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// Successful authentication payload.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// The API answers either with the bare payload or inside a
/// `{"status": "success", "data": {...}}` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AuthEnvelope {
    Bare(AuthResponse),
    Wrapped { data: AuthResponse },
}

impl AuthEnvelope {
    pub fn into_inner(self) -> AuthResponse {
        match self {
            Self::Bare(response) | Self::Wrapped { data: response } => response,
        }
    }
}

/// Error body; the client reads `message`, the backend envelope uses `error`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.filter(|m| !m.trim().is_empty()))
    }
}
