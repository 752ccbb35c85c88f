/**
 * Current User Handler
 *
 * `GET /api/users/me` returns the sanitized user the auth guard attached to
 * the request. The guard has already done the store lookup, so this handler
 * never touches the store.
 */

use axum::Json;

use crate::backend::middleware::auth::AuthUser;
use crate::shared::models::PublicUser;
use crate::shared::ApiResponse;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {
///   "success": true,
///   "data": { "id": "…", "username": "ada", "email": "ada@example.com", "createdAt": "…" }
/// }
/// ```
pub async fn get_me(AuthUser(user): AuthUser) -> Json<ApiResponse<PublicUser>> {
    Json(ApiResponse::ok(user))
}
