//! Shared Module
//!
//! Wire and domain types used by every backend layer: entity records, joined
//! read views, request payloads, the response envelope and validation errors.
//! Nothing in here knows about HTTP status codes or the store.

/// Shared error types
pub mod error;

/// Response envelope
pub mod envelope;

/// Entity records, views and payloads
pub mod models;

/// Payload validation helpers
pub mod validation;

/// Re-export commonly used types for convenience
pub use envelope::ApiResponse;
pub use error::SharedError;
