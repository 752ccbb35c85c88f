//! Response Envelope
//!
//! Every endpoint answers with the same JSON wrapper:
//!
//! ```json
//! { "success": true, "count": 2, "data": [ ... ] }
//! { "success": false, "message": "Blog post not found" }
//! ```
//!
//! Members that carry no value are omitted from the serialized body.

use serde::{Deserialize, Serialize};

/// JSON envelope shared by success and error responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload for successful reads and writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Number of items for list responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Human-readable status or error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a single payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
        }
    }

    /// Attach a message to the response
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful list response; `count` mirrors the list length
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with only a message (used by deletes)
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            count: None,
            message: Some(message.into()),
        }
    }

    /// Failure response with a message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            message: Some(message.into()),
        }
    }
}
