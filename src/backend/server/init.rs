/**
 * Server Initialization
 *
 * This module builds the application from a loaded configuration.
 *
 * # Initialization Process
 *
 * 1. Require `DATABASE_URL` and connect the PostgreSQL pool
 * 2. Run migrations (a failure is logged and startup continues)
 * 3. Build `AppState` (token keys, password hasher, store handle)
 * 4. Create the router with all routes and layers
 *
 * Any failure other than migrations is fatal; the binary logs it and exits.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{AppConfig, ConfigError};
use crate::backend::server::state::AppState;
use crate::backend::store::{PgStore, Store, StoreError};

/// Fatal errors while bringing the server up
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("store connection failed: {0}")]
    Store(#[from] StoreError),

    #[error("password hasher setup failed: {0}")]
    Hasher(#[from] bcrypt::BcryptError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connect to PostgreSQL and apply migrations
pub async fn connect_store(config: &AppConfig) -> Result<PgStore, StartupError> {
    let database_url = config
        .database_url
        .as_deref()
        .ok_or(ConfigError::MissingValue("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let store = PgStore::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match store.migrate().await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(store)
}

/// Build the router on top of an already connected store
pub fn create_app_with_store(
    store: Arc<dyn Store>,
    config: AppConfig,
) -> Result<Router, StartupError> {
    let app_state = AppState::new(store, config)?;
    Ok(create_router(app_state)?)
}

/// Create and configure the Axum application against PostgreSQL
pub async fn create_app(config: AppConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing portfolio API ({:?})", config.environment);

    let store = connect_store(&config).await?;
    create_app_with_store(Arc::new(store), config)
}
