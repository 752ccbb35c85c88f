//! Portfolio API - Main Library
//!
//! REST backend for a personal portfolio and blog: user accounts with
//! bearer-token authentication, blog posts with comments, a project list
//! and a contact form.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no HTTP or store knowledge
//!   - Entity records, joined views and request payloads
//!   - The `{success, data, count, message}` response envelope
//!   - Validation helpers and errors
//!
//! - **`backend`** - Server-side code
//!   - Axum router, handlers and auth guard
//!   - Resource services with ownership checks
//!   - PostgreSQL and in-process stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use portfolio_api::backend::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation
//! - `backend::ApiError` at the HTTP boundary
//! - `backend::store::StoreError` for persistence

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
