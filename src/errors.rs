// Copyright 2025 Cowboy AI, LLC.

//! Error types carried in the failure branch of pipelines
//!
//! Expected failures are values. They travel in `Either::Left` and are never
//! raised past the decode adapter. The one exception is [`WrongBranch`], a
//! programmer error raised when a partial extractor is used on the wrong
//! branch.

use std::fmt;

use thiserror::Error;

use crate::decode::DecodeError;

/// Errors built by pipeline code after (or instead of) a successful decode
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field was missing or empty
    #[error("Missing field: {field}")]
    MissingField {
        /// Name of the field that was expected
        field: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The raw text could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// External service error
    #[error("External service error: {service} - {message}")]
    ExternalServiceError {
        /// Name of the external service
        service: String,
        /// Error message from the service
        message: String,
    },

    /// Generic domain error
    #[error("{0}")]
    Generic(String),
}

impl DomainError {
    /// Create a generic domain error
    pub fn generic(msg: impl Into<String>) -> Self {
        DomainError::Generic(msg.into())
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        DomainError::MissingField {
            field: field.into(),
        }
    }

    /// Check if this is a missing field error
    pub fn is_missing_field(&self) -> bool {
        matches!(self, DomainError::MissingField { .. })
    }

    /// Check if this is a decode error
    pub fn is_decode_error(&self) -> bool {
        matches!(self, DomainError::Decode(_))
    }
}

/// One of the two branches of an [`Either`](crate::Either)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// The failure branch
    Left,
    /// The success branch
    Right,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Left => f.write_str("Left"),
            Branch::Right => f.write_str("Right"),
        }
    }
}

/// A partial extractor was called against the unpopulated branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unwrap on wrong branch: expected {expected}, found {found}")]
pub struct WrongBranch {
    /// The branch the caller asked for
    pub expected: Branch,
    /// The branch the container actually holds
    pub found: Branch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = DomainError::missing_field("height");
        assert_eq!(err.to_string(), "Missing field: height");

        let err = DomainError::ValidationError("height is not a number".to_string());
        assert_eq!(err.to_string(), "Validation error: height is not a number");

        let err = DomainError::ExternalServiceError {
            service: "swapi".to_string(),
            message: "timeout".to_string(),
        };
        assert_eq!(err.to_string(), "External service error: swapi - timeout");

        let err = DomainError::generic("no data in response");
        assert_eq!(err.to_string(), "no data in response");
    }

    #[test]
    fn test_decode_error_is_transparent() {
        let raw = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = raw.to_string();

        let err = DomainError::from(DecodeError::from(raw));

        assert!(err.is_decode_error());
        assert!(!err.is_missing_field());
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_wrong_branch_message() {
        let err = WrongBranch {
            expected: Branch::Right,
            found: Branch::Left,
        };
        assert_eq!(
            err.to_string(),
            "unwrap on wrong branch: expected Right, found Left"
        );
    }
}
