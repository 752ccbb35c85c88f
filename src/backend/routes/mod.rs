//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, fallback and tower-http layers
//! └── api_routes.rs   - `/api` endpoint bindings
//! ```
//!
//! # Route Organization
//!
//! 1. **Health** - `GET /`
//! 2. **API Routes** - everything under `/api`
//! 3. **Fallback** - 404 `{success: false, message: "Route not found"}`

/// Main router creation
pub mod router;

/// API endpoint bindings
pub mod api_routes;

pub use router::create_router;
