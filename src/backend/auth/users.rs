/**
 * Registration and Login
 *
 * This module holds the credential logic behind the auth handlers. It talks
 * to the store through `UserStore` only, so it runs the same against
 * PostgreSQL and the in-process store.
 *
 * # Registration
 *
 * 1. All of username, email and password must be present
 * 2. Email shape and password length are checked
 * 3. An existing user with the same email or username is a conflict
 * 4. The password is hashed and the user inserted; a unique-index race
 *    reported by the store is also a conflict
 * 5. A token is issued for the new user
 *
 * # Login
 *
 * Lookup is by email only. An unknown email and a wrong password produce
 * the same `InvalidCredentials` error, and both paths run one bcrypt
 * verification.
 */

use crate::backend::auth::handlers::types::{AuthData, LoginRequest, RegisterRequest};
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::ApiError;
use crate::backend::store::UserStore;
use crate::shared::models::{NewUser, User};
use crate::shared::validation::{require_all, validate_email, MIN_PASSWORD_LEN};
use crate::shared::SharedError;

/// Canonical form of an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn issue_auth_data(tokens: &TokenService, user: User) -> Result<AuthData, ApiError> {
    let token = tokens.issue(user.id).map_err(|e| {
        tracing::error!("Failed to create token for {}: {}", user.id, e);
        ApiError::internal(e.to_string())
    })?;

    Ok(AuthData {
        id: user.id,
        username: user.username,
        email: user.email,
        token,
    })
}

/// Create an account and return its first token
pub async fn register<S>(
    store: &S,
    passwords: &PasswordHasher,
    tokens: &TokenService,
    request: RegisterRequest,
) -> Result<AuthData, ApiError>
where
    S: UserStore + ?Sized,
{
    require_all(&[
        ("username", request.username.as_deref()),
        ("email", request.email.as_deref()),
        ("password", request.password.as_deref()),
    ])?;

    let username = request.username.unwrap_or_default().trim().to_string();
    let email = normalize_email(&request.email.unwrap_or_default());
    let password = request.password.unwrap_or_default();

    validate_email(&email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        )
        .into());
    }

    if store
        .find_user_by_email_or_username(&email, &username)
        .await?
        .is_some()
    {
        tracing::warn!("Registration rejected, user exists: {}", username);
        return Err(ApiError::conflict(
            "User already exists with that email or username",
        ));
    }

    let password_hash = passwords.hash(&password).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::from(e)
    })?;

    let user = store
        .insert_user(NewUser {
            username,
            email,
            password_hash,
        })
        .await?;

    tracing::info!("User registered: {} ({})", user.username, user.id);
    issue_auth_data(tokens, user)
}

/// Check credentials and return a fresh token
pub async fn authenticate<S>(
    store: &S,
    passwords: &PasswordHasher,
    tokens: &TokenService,
    request: LoginRequest,
) -> Result<AuthData, ApiError>
where
    S: UserStore + ?Sized,
{
    require_all(&[
        ("email", request.email.as_deref()),
        ("password", request.password.as_deref()),
    ])
    .map_err(|_| ApiError::invalid_input("Please provide email and password"))?;

    let email = normalize_email(&request.email.unwrap_or_default());
    let password = request.password.unwrap_or_default();

    let Some(user) = store.find_user_by_email(&email).await? else {
        passwords.verify_dummy(&password);
        tracing::warn!("Login failed: unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    let valid = passwords.verify(&password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error for {}: {:?}", user.id, e);
        ApiError::from(e)
    })?;

    if !valid {
        tracing::warn!("Login failed: wrong password for {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    tracing::info!("User logged in: {} ({})", user.username, user.id);
    issue_auth_data(tokens, user)
}
