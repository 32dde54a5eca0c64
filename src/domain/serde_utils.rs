//! Serde utilities for API payloads.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Handles identifiers that the API may send as either strings or integers.
pub mod string_or_int {
    use super::{Deserializer, Serializer, Visitor, de, fmt};

    /// Serializes an identifier as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    /// Deserializes an identifier from a string or integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a non-empty string nor an integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrIntVisitor;

        impl Visitor<'_> for StringOrIntVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-empty string or integer identifier")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let value = value.trim();
                if value.is_empty() {
                    return Err(E::invalid_value(de::Unexpected::Str(value), &self));
                }
                Ok(value.to_string())
            }
        }

        deserializer.deserialize_any(StringOrIntVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::string_or_int")]
        id: String,
    }

    #[test]
    fn test_accepts_integer_and_string_ids() {
        let numeric: Wrapper = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(numeric.id, "42");

        let textual: Wrapper = serde_json::from_str(r#"{"id": "a1b2"}"#).unwrap();
        assert_eq!(textual.id, "a1b2");
    }

    #[test]
    fn test_rejects_empty_and_other_types() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"id": ""}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"id": true}"#).is_err());
    }
}
