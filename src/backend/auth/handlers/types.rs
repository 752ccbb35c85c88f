/**
 * Authentication Handler Types
 *
 * This module defines the request and response bodies used by the
 * registration, login and current-user handlers.
 *
 * Every request field is optional at the type level so a missing field is
 * reported with the envelope message instead of a deserialization error.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct RegisterRequest {
    /// Chosen username, unique across users
    pub username: Option<String>,
    /// Email address, unique across users
    pub email: Option<String>,
    /// Plaintext password (hashed before storage)
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct LoginRequest {
    /// Email the account was registered with
    pub email: Option<String>,
    /// Plaintext password to verify against the stored hash
    pub password: Option<String>,
}

/// Payload returned by registration and login
///
/// Carries the account identity plus a fresh 30-day token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthData {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub token: String,
}
