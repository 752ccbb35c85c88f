/**
 * Application State Management
 *
 * This module defines the application state and the `FromRef` impls that
 * let handlers extract just the part they need.
 *
 * # Architecture
 *
 * `AppState` holds everything that is shared across requests:
 * - The store handle (`Arc<dyn Store>`)
 * - The token service with its signing keys
 * - The password hasher
 * - The loaded configuration
 *
 * All of it is read-only after startup, so no locks are needed here; the
 * store implementation owns its own concurrency.
 *
 * # Example
 *
 * ```rust,ignore
 * use std::sync::Arc;
 * use axum::extract::State;
 * use portfolio_api::backend::store::Store;
 *
 * async fn handler(State(store): State<Arc<dyn Store>>) {
 *     let posts = store.list_posts().await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::AppConfig;
use crate::backend::store::Store;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Persistence for every collection
    pub store: Arc<dyn Store>,

    /// Issues and verifies session tokens
    pub tokens: Arc<TokenService>,

    /// bcrypt hasher with the configured cost
    pub passwords: Arc<PasswordHasher>,

    /// Configuration the state was built from
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the state from a store and a validated configuration
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Result<Self, bcrypt::BcryptError> {
        let passwords = PasswordHasher::new(config.bcrypt_cost)?;
        Ok(Self {
            store,
            tokens: Arc::new(TokenService::new(&config.jwt_secret)),
            passwords: Arc::new(passwords),
            config: Arc::new(config),
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Implement FromRef for the store handle
///
/// Lets handlers take `State(store): State<Arc<dyn Store>>`.
impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Implement FromRef for the token service
impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// Implement FromRef for the password hasher
impl FromRef<AppState> for Arc<PasswordHasher> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords.clone()
    }
}

/// Implement FromRef for the configuration
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
