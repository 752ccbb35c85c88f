//! Shared Error Types
//!
//! This module defines the validation errors raised while turning client
//! payloads into domain values. They carry no HTTP knowledge; the backend
//! converts them into `400 Bad Request` envelopes.
//!
//! # Error Categories
//!
//! - `MissingFields` - One or more required fields were absent or blank
//! - `ValidationError` - A field was present but malformed
//!
//! # Usage
//!
//! ```rust
//! use portfolio_api::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Please provide a valid email address");
//! assert!(error.to_string().contains("valid email"));
//! ```
use thiserror::Error;

/// Validation errors shared by every resource payload
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Required fields were missing or blank
    #[error("{message}")]
    MissingFields {
        /// Names of the offending fields, in declaration order
        fields: Vec<&'static str>,
        /// Human-readable error message
        message: String,
    },

    /// A field was present but failed a format or length rule
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a missing-fields error with the generic message
    pub fn missing(fields: Vec<&'static str>) -> Self {
        Self::missing_with(fields, "Please provide all required fields")
    }

    /// Create a missing-fields error with a custom message
    pub fn missing_with(fields: Vec<&'static str>, message: impl Into<String>) -> Self {
        Self::MissingFields {
            fields,
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
