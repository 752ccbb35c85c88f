/**
 * Server Configuration
 *
 * This module loads and validates the server configuration. Values come from
 * environment variables (after `dotenv` has merged any `.env` file); tests
 * build a configuration directly with `AppConfig::builder()`.
 *
 * # Variables
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required by the binary)
 * - `JWT_SECRET` - token signing secret (required)
 * - `PORT` - listen port, default 5000
 * - `CLIENT_URL` - allowed CORS origin, default `http://localhost:3000`
 * - `APP_ENV` - `development` or `production`, default development
 * - `BCRYPT_COST` - bcrypt work factor between 4 and 31, default 10
 */

use std::str::FromStr;

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::InvalidValue {
                key: "APP_ENV",
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: Option<String>,
    /// Secret used to sign session tokens
    pub jwt_secret: String,
    /// Listen port
    pub port: u16,
    /// Origin allowed by CORS
    pub client_url: String,
    /// Deployment environment
    pub environment: Environment,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; unset and empty values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut builder = AppConfig::builder();

        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(port) = get("PORT") {
            let port = port.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
            builder = builder.port(port);
        }
        if let Some(client_url) = get("CLIENT_URL") {
            builder = builder.client_url(client_url);
        }
        if let Some(env) = get("APP_ENV") {
            builder = builder.environment(env.parse()?);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            let cost = cost.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: cost.clone(),
            })?;
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }

        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }

        let origin_ok = (self.client_url.starts_with("http://")
            || self.client_url.starts_with("https://"))
            && HeaderValue::from_str(&self.client_url).is_ok();
        if !origin_ok {
            return Err(ConfigError::InvalidUrl(self.client_url.clone()));
        }

        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: Option<u16>,
    client_url: Option<String>,
    environment: Option<Environment>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn client_url(mut self, url: impl Into<String>) -> Self {
        self.client_url = Some(url.into());
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self.database_url,
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            port: self.port.unwrap_or(DEFAULT_PORT),
            client_url: self
                .client_url
                .unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string()),
            environment: self.environment.unwrap_or_default(),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}
