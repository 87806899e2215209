//! Shared Error Types
//!
//! Error types used by both the ledger layer and the HTTP handlers.
//!
//! # Error Categories
//!
//! - `ValidationError` - a caller-correctable bad field (maps to 400)
//! - `PersistenceError` - durable store unavailable or a write/scan failed (maps to 500)
//! - `SerializationError` - JSON encoding/decoding failures

use thiserror::Error;

/// Errors shared across the messaging core
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// A required field is missing or empty
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The durable store failed; the caller may retry the whole request
    #[error("Persistence error: {message}")]
    PersistenceError {
        /// Human-readable error message
        message: String,
    },

    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::PersistenceError {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for SharedError {
    fn from(err: sqlx::Error) -> Self {
        Self::persistence(format!("database error: {}", err))
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("text", "text is required");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "text");
                assert_eq!(message, "text is required");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_persistence_error() {
        let error = SharedError::persistence("connection lost");
        match error {
            SharedError::PersistenceError { message } => {
                assert_eq!(message, "connection lost");
            }
            _ => panic!("Expected PersistenceError"),
        }
    }

    #[test]
    fn test_sqlx_error_maps_to_persistence() {
        let error: SharedError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, SharedError::PersistenceError { .. }));
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("fromCode", "fromCode is required");
        assert!(error.to_string().contains("fromCode"));
    }
}
