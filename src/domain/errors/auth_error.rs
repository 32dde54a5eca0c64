//! Authentication error types.

use thiserror::Error;

/// Authentication error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("request rejected by server ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("network error during authentication: {message}")]
    Network { message: String },

    #[error("invalid response from authentication API: {message}")]
    InvalidResponse { message: String },

    #[error("request superseded by a newer authentication attempt")]
    Superseded,

    #[error("unexpected authentication error: {message}")]
    Unexpected { message: String },
}

impl AuthError {
    /// Creates rejected error.
    #[must_use]
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns the human-readable message supplied by the server, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Returns whether the server answered with an HTTP 401.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_for_rejections() {
        let rejected = AuthError::rejected(401, Some("Invalid credentials".to_string()));
        assert_eq!(rejected.server_message(), Some("Invalid credentials"));
        assert!(rejected.is_unauthorized());

        assert_eq!(AuthError::network("timed out").server_message(), None);
        assert_eq!(AuthError::rejected(500, None).server_message(), None);
    }

    #[test]
    fn test_blank_server_message_is_ignored() {
        let rejected = AuthError::rejected(400, Some("   ".to_string()));
        assert_eq!(rejected.server_message(), None);
    }
}
