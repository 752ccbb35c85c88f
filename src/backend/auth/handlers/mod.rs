//! Authentication Handlers Module
//!
//! HTTP handlers for the `/api/users` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users/register
//! - **`login`** - POST /api/users/login
//! - **`get_me`** - GET /api/users/me (behind the auth guard)

/// Request and response types
pub mod types;

/// Registration handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{AuthData, LoginRequest, RegisterRequest};

pub use login::login;
pub use me::get_me;
pub use signup::register;
