//! Authentication DTOs.

use zeroize::Zeroizing;

/// Login form data.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password, wiped from memory on drop.
    pub password: Zeroizing<String>,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

/// Registration form data.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    /// Account email.
    pub email: String,
    /// Account password, wiped from memory on drop.
    pub password: Zeroizing<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl RegisterRequest {
    /// Creates new registration request.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Which authentication flow produced a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    /// Email/password login.
    Login,
    /// Account registration.
    Register,
}

impl AuthOperation {
    /// Message stored when the server does not supply one.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
        }
    }
}

impl std::fmt::Display for AuthOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
        }
    }
}
