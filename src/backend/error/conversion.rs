/**
 * Error Conversion
 *
 * This module turns `ApiError` into HTTP responses so handlers can return
 * `Result<_, ApiError>` and use `?` freely.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "success": false,
 *   "message": "Not authorized to delete this blog post"
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;
use crate::shared::ApiResponse;

impl IntoResponse for ApiError {
    /// Convert an API error into an enveloped JSON response
    ///
    /// Server-side failures are logged here with their full detail; the
    /// client only receives the generic message.
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        (status, Json(ApiResponse::failure(self.message()))).into_response()
    }
}
