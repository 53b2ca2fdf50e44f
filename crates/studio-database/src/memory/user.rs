//! In-memory user repository using dashmap.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use studio_core::AppError;
use studio_core::result::AppResult;
use studio_core::types::UserId;
use studio_entity::user::{NewUser, User};

use crate::repositories::user::{USER_EXISTS, UserStore};

/// Users keyed by lowercased email, so uniqueness checks are atomic.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: DashMap<String, User>,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .get(&email_key(email))
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.value().clone()))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        match self.users.entry(email_key(&new_user.email)) {
            Entry::Occupied(_) => Err(AppError::conflict(USER_EXISTS)),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let user = User {
                    id: UserId::new(),
                    name: new_user.name,
                    email: new_user.email.trim().to_string(),
                    password_hash: new_user.password_hash,
                    role: new_user.role,
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }
}
