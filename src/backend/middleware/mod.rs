//! Middleware Module
//!
//! Request-pipeline stages and checks that sit in front of the handlers.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer-token guard for protected routes and the `AuthUser` extractor
//! - **`ownership`** - Owner-only checks for update and delete
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{handler::Handler, middleware, routing::post};
//! use portfolio_api::backend::middleware::auth_middleware;
//!
//! let guard = middleware::from_fn_with_state(state.clone(), auth_middleware);
//! let route = post(create_project.layer(guard));
//! ```

pub mod auth;

pub mod ownership;

pub use auth::{auth_middleware, authenticate_headers, AuthUser};
pub use ownership::{ensure_owner, is_owner};
