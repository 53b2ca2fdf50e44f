//! PostgreSQL connection pool management.
//!
//! The pool is created once per process and shared by every repository.
//! [`DatabasePool::shutdown`] closes it after the server stops.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::OnceCell;
use tracing::info;

use studio_core::config::DatabaseConfig;
use studio_core::error::{AppError, ErrorKind};

static POOL: OnceCell<DatabasePool> = OnceCell::const_new();

/// Wrapper around the sqlx PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx connection pool.
    pool: PgPool,
}

impl DatabasePool {
    /// Return the process-wide pool, connecting on the first call.
    ///
    /// Concurrent first callers wait on the same connection attempt. A
    /// failed attempt leaves the cell empty so a later call may retry.
    pub async fn init(config: &DatabaseConfig) -> Result<&'static Self, AppError> {
        POOL.get_or_try_init(|| Self::connect(config)).await
    }

    /// The pool, if [`Self::init`] has succeeded.
    pub fn get() -> Option<&'static Self> {
        POOL.get()
    }

    /// Close the process-wide pool if it was ever opened.
    pub async fn shutdown() {
        if let Some(db) = POOL.get() {
            db.close().await;
        }
    }

    /// Open a new, independent pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %mask_password(&config.url),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Successfully connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        ping(&self.pool).await
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        if self.pool.is_closed() {
            return;
        }
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Run `SELECT 1` against a pool.
pub(crate) async fn ping(pool: &PgPool) -> Result<bool, AppError> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|v| v == 1)
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
}

/// Mask the password portion of a database URL for safe logging.
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}
