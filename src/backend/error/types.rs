/**
 * API Error Types
 *
 * This module defines the error taxonomy every handler and service returns.
 * Each variant maps to exactly one HTTP status and is rendered as the
 * standard `{success: false, message}` envelope.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `InvalidInput` - missing required fields or malformed values (400)
 * - `Conflict` - duplicate username/email at registration (400)
 * - `Unauthenticated` - missing, invalid or expired token (401)
 * - `InvalidCredentials` - failed login, identical for every cause (401)
 * - `Forbidden` - authenticated caller does not own the resource (403)
 * - `NotFound` - no such resource (404)
 *
 * ## Server Errors
 *
 * - `Internal` - store, hashing or signing failure (500); the detail is
 *   logged and never sent to the client
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Message sent for every 500 response
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// API error returned by services and handlers
///
/// # Usage
///
/// ```rust
/// use portfolio_api::backend::error::ApiError;
/// use axum::http::StatusCode;
///
/// let err = ApiError::not_found("Blog post not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing required fields or malformed values
    #[error("{message}")]
    InvalidInput {
        /// Human-readable error message
        message: String,
    },

    /// No usable credential, or the user behind it is gone
    #[error("{message}")]
    Unauthenticated {
        /// Which step of the guard failed
        message: String,
    },

    /// Login failed; deliberately says nothing about which part was wrong
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated, but not the owner of the resource
    #[error("{message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// The addressed resource does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// A unique field is already taken
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Store, hashing or signing failure
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the logs; not sent to clients
        message: String,
    },
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidInput`, `Conflict` - 400 Bad Request
    /// - `Unauthenticated`, `InvalidCredentials` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated { .. } | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that goes into the response envelope
    ///
    /// Internal errors always answer with the generic message.
    pub fn message(&self) -> String {
        match self {
            Self::Internal { .. } => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<SharedError> for ApiError {
    fn from(err: SharedError) -> Self {
        Self::invalid_input(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { .. } => {
                Self::conflict("User already exists with that email or username")
            }
            StoreError::Database(e) => Self::internal(format!("store failure: {e}")),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal(format!("password hashing failed: {err}"))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_input(rejection.body_text())
    }
}
