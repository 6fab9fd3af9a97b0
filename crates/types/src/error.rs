//! Error types shared by every decoding path.

use std::fmt;

use thiserror::Error;

/// Errors surfaced while turning wire data into resource records.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The raw value did not have the structure the target type expects.
    #[error(transparent)]
    Malformed(#[from] serde_json::Error),

    /// No catalog entry or provider recognized the kind name.
    #[error("unknown resource type: {kind}")]
    UnknownKind { kind: String },

    /// A field the caller requires was absent or had the wrong type.
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// Raised by a caller-supplied element decoder.
    #[error("{0}")]
    Custom(String),
}

impl DecodeError {
    /// Create an unknown kind error.
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownKind { kind: kind.into() }
    }

    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }
}

impl serde::de::Error for DecodeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_collection;
    use serde_json::{Value, json};

    fn positive(value: &Value) -> Result<u64, DecodeError> {
        match value.as_u64() {
            Some(number) if number > 0 => Ok(number),
            _ => Err(serde::de::Error::custom(format!("expected a positive integer, got {value}"))),
        }
    }

    #[test]
    fn element_decoders_can_raise_custom_errors() {
        assert_eq!(decode_collection(&json!([1, 2]), positive).expect("positives"), vec![1, 2]);

        let error = decode_collection(&json!([1, 0]), positive).expect_err("zero rejected");
        assert!(matches!(error, DecodeError::Custom(_)));
        assert_eq!(error.to_string(), "expected a positive integer, got 0");
    }

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(DecodeError::unknown_kind("Custom::Nope").to_string(), "unknown resource type: Custom::Nope");
        assert_eq!(DecodeError::missing_field("Type").to_string(), "missing required field 'Type'");
    }
}
