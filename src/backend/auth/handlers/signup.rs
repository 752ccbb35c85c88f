/**
 * Registration Handler
 *
 * This module implements `POST /api/users/register`.
 *
 * # Validation
 *
 * - `username`, `email` and `password` are all required
 * - Email must match `^\S+@\S+\.\S+$`
 * - Password must be at least 6 characters
 * - Email and username must both be unused
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at the configured cost
 * - Passwords are never returned or logged
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::backend::auth::handlers::types::{AuthData, RegisterRequest};
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users;
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;
use crate::backend::store::Store;
use crate::shared::ApiResponse;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing field, malformed email, short password, or
///   the email/username is taken
/// * `500 Internal Server Error` - hashing, store or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/users/register HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "ada", "email": "ada@example.com", "password": "secret123" }
/// ```
///
/// # Example Response (201)
///
/// ```json
/// {
///   "success": true,
///   "data": { "id": "…", "username": "ada", "email": "ada@example.com", "token": "eyJ…" }
/// }
/// ```
pub async fn register(
    State(store): State<Arc<dyn Store>>,
    State(passwords): State<Arc<PasswordHasher>>,
    State(tokens): State<Arc<TokenService>>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthData>>), ApiError> {
    let data = users::register(store.as_ref(), &passwords, &tokens, request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(data))))
}
