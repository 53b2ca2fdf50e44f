//! User account storage.

use async_trait::async_trait;
use sqlx::PgPool;

use studio_core::error::{AppError, ErrorKind};
use studio_core::result::AppResult;
use studio_core::types::UserId;
use studio_entity::user::{NewUser, User};

/// Account lookups needed by the credential service.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by email, ignoring case.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Create a user. A taken email is a `Conflict` error.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Every user, newest first.
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Message shared by every backend for duplicate emails.
pub const USER_EXISTS: &str = "User already exists";

/// PostgreSQL-backed user repository.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email.trim())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (id, name, email, password_hash, role)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING *"#,
        )
        .bind(UserId::new())
        .bind(&new_user.name)
        .bind(new_user.email.trim())
        .bind(&new_user.password_hash)
        .bind(new_user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::conflict(USER_EXISTS);
                }
            }
            AppError::with_source(ErrorKind::Database, "Failed to create user", e)
        })
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }
}
