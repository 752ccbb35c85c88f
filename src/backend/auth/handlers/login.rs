/**
 * Login Handler
 *
 * This module implements `POST /api/users/login`.
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 body
 * - Both paths run one bcrypt verification
 */

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::backend::auth::handlers::types::{AuthData, LoginRequest};
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users;
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;
use crate::backend::store::Store;
use crate::shared::ApiResponse;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing
/// * `401 Unauthorized` - "Invalid credentials"
/// * `500 Internal Server Error` - store or token failure
pub async fn login(
    State(store): State<Arc<dyn Store>>,
    State(passwords): State<Arc<PasswordHasher>>,
    State(tokens): State<Arc<TokenService>>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthData>>, ApiError> {
    let data = users::authenticate(store.as_ref(), &passwords, &tokens, request).await?;
    Ok(Json(ApiResponse::ok(data)))
}
