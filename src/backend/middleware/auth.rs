/**
 * Authentication Middleware
 *
 * This module guards protected routes. It reads the bearer token from the
 * `Authorization` header, verifies it, loads the user it names and attaches
 * the sanitized `PublicUser` to the request extensions. Handlers read it
 * back with the `AuthUser` extractor.
 *
 * # Rejections
 *
 * - Header absent or not `Bearer <token>` - 401 "Not authorized, no token provided"
 * - Token invalid or expired - 401 "Not authorized, token failed"
 * - User behind the token no longer exists - 401 "User not found"
 * - Store failure during the lookup - 500
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::store::UserStore;
use crate::shared::models::PublicUser;

pub const NO_TOKEN_MESSAGE: &str = "Not authorized, no token provided";
pub const TOKEN_FAILED_MESSAGE: &str = "Not authorized, token failed";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Pull the token out of a `Bearer <token>` authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolve the request's headers to the user they authenticate
pub async fn authenticate_headers<S>(
    headers: &HeaderMap,
    tokens: &TokenService,
    store: &S,
) -> Result<PublicUser, ApiError>
where
    S: UserStore + ?Sized,
{
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::unauthenticated(NO_TOKEN_MESSAGE)
    })?;

    let user_id = tokens.verify(token).map_err(|e| {
        tracing::warn!("Token rejected: {}", e);
        ApiError::unauthenticated(TOKEN_FAILED_MESSAGE)
    })?;

    let user = store
        .find_user_by_id(user_id)
        .await
        .map_err(|e| {
            tracing::error!("User lookup failed for {}: {}", user_id, e);
            ApiError::from(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("Token names a missing user: {}", user_id);
            ApiError::unauthenticated(USER_NOT_FOUND_MESSAGE)
        })?;

    Ok(PublicUser::from(user))
}

/// Authentication middleware
///
/// Attach with `middleware::from_fn_with_state(state, auth_middleware)`.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user =
        authenticate_headers(request.headers(), &state.tokens, state.store.as_ref()).await?;

    tracing::debug!("Authenticated request for user {}", user.id);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the user attached by `auth_middleware`
#[derive(Clone, Debug)]
pub struct AuthUser(pub PublicUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<PublicUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("PublicUser not found in request extensions");
                ApiError::unauthenticated(NO_TOKEN_MESSAGE)
            })
    }
}
