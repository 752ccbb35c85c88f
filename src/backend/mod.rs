//! Backend Module
//!
//! All server-side code for the portfolio API: an Axum HTTP server over a
//! PostgreSQL store, with bearer-token authentication and owner-only writes.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route bindings, fallback and HTTP layers
//! - **`auth`** - Registration, login, passwords and session tokens
//! - **`middleware`** - Auth guard and ownership checks
//! - **`blog`** - Blog posts and comments
//! - **`projects`** - Portfolio projects
//! - **`contact`** - Contact form messages
//! - **`store`** - Persistence traits and implementations
//! - **`error`** - API error type and response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── extract.rs      - JSON body extractor and path id parsing
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request guards
//! ├── blog/           - Blog service and handlers
//! ├── projects/       - Project service and handlers
//! ├── contact/        - Contact service and handlers
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Route → auth guard (protected routes only) → handler → service → store →
//! response envelope. Every handler failure is an `ApiError`, rendered as
//! `{success: false, message}` with the matching status.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Request guards
pub mod middleware;

/// Blog posts and comments
pub mod blog;

/// Portfolio projects
pub mod projects;

/// Contact form
pub mod contact;

/// Persistence
pub mod store;

/// Backend error types
pub mod error;

/// Request extractors
pub mod extract;

pub use error::ApiError;
pub use server::{create_app, create_app_with_store, AppConfig, AppState};
