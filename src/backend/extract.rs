//! JSON body extractor whose rejection uses the API error envelope.

use axum::extract::FromRequest;

use crate::backend::error::ApiError;

/// Like `axum::Json`, but a malformed body becomes `ApiError::InvalidInput`
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Parse a path id; anything that is not a UUID names no resource
pub fn parse_id(raw: &str, not_found: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(raw).map_err(|_| ApiError::not_found(not_found))
}
