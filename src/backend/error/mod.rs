//! Backend Error Module
//!
//! This module defines the error taxonomy used by services and HTTP handlers
//! and its conversion into the response envelope.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use portfolio_api::backend::error::ApiError;
//!
//! async fn handler() -> Result<(), ApiError> {
//!     Err(ApiError::not_found("Project not found"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, INTERNAL_MESSAGE};
