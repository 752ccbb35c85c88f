//! Server Module
//!
//! Configuration, shared state and application assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and validation
//! └── init.rs         - Store connection and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env`
//! 2. **Store Connection**: PostgreSQL pool plus migrations
//! 3. **State Creation**: token service, password hasher, store handle
//! 4. **Router Creation**: routes, fallback and tower-http layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{AppConfig, ConfigError, Environment};
pub use init::{create_app, create_app_with_store, StartupError};
pub use state::AppState;
