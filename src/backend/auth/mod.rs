//! Authentication Module
//!
//! This module handles user registration, login and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - Registration and login logic over `UserStore`
//! - **`passwords`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance and verification
//! - **`handlers`** - HTTP handlers for the `/api/users` endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Registration and login logic
//! ├── passwords.rs    - Password hasher
//! ├── sessions.rs     - Token service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - Registration handler
//!     ├── login.rs    - Login handler
//!     └── me.rs       - Current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Me**: bearer token → auth guard loads the user → user returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs that expire after 30 days
//! - Failed logins return 401 with one message for every cause

/// Registration and login logic
pub mod users;

/// Password hashing
pub mod passwords;

/// JWT token issuance and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register, AuthData, LoginRequest, RegisterRequest};
pub use passwords::PasswordHasher;
pub use sessions::{TokenError, TokenService};
