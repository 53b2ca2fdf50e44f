//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod gate;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::{DatabaseConfig, StoreProvider};
pub use self::gate::GateConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Environment variable prefix for overrides (`STUDIO__AUTH__JWT_SECRET`).
pub const ENV_PREFIX: &str = "STUDIO";

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay + environment variables).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Content store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Credential and session token settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Access gate settings.
    #[serde(default)]
    pub gate: GateConfig,
    /// Asset storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `STUDIO__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot run with.
    ///
    /// The signing secret is always required; the connection string only
    /// when PostgreSQL backs the content store.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret must be set (STUDIO__AUTH__JWT_SECRET)",
            ));
        }
        if self.database.provider == StoreProvider::Postgres && self.database.url.trim().is_empty()
        {
            return Err(AppError::configuration(
                "database.url must be set when database.provider = \"postgres\"",
            ));
        }
        if self.auth.session_update_age_minutes > self.auth.session_max_age_minutes {
            return Err(AppError::configuration(
                "auth.session_update_age_minutes cannot exceed auth.session_max_age_minutes",
            ));
        }
        Ok(())
    }
}
