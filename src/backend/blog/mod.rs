//! Blog Module
//!
//! Blog posts and their comments.
//!
//! # Module Structure
//!
//! ```text
//! blog/
//! ├── mod.rs       - Module exports
//! ├── service.rs   - CRUD, ownership checks and the comment cascade
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod handlers;

pub mod service;
