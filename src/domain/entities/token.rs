//! Session token value object.

use std::fmt;

/// Opaque session credential issued by the authentication API.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    /// Creates token, rejecting empty or whitespace-only values. The value is
    /// kept exactly as issued.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();

        if value.trim().is_empty() {
            return None;
        }

        Some(Self { value })
    }

    /// Returns token as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes token and returns inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Returns masked token for display.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.value.len() <= 10 || !self.value.is_ascii() {
            return "*".repeat(self.value.chars().count());
        }

        let visible_prefix = &self.value[..4];
        let visible_suffix = &self.value[self.value.len() - 4..];
        format!("{visible_prefix}...{visible_suffix}")
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "eyJhbGciOiJIUzI1NiJ9.payload.signature";

    #[test]
    fn test_blank_token_rejected() {
        assert!(SessionToken::new("").is_none());
        assert!(SessionToken::new("   ").is_none());
    }

    #[test]
    fn test_token_kept_verbatim() {
        let token = SessionToken::new(" dummy-token=").unwrap();
        assert_eq!(token.as_str(), " dummy-token=");
        assert_eq!(token.into_inner(), " dummy-token=");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = SessionToken::new(RAW).unwrap();

        assert!(!format!("{token:?}").contains(RAW));
        assert!(!token.to_string().contains(RAW));
        assert!(token.masked().contains("..."));
    }

    #[test]
    fn test_short_token_fully_masked() {
        let token = SessionToken::new("abc").unwrap();
        assert_eq!(token.masked(), "***");
    }
}
