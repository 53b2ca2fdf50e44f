//! JWT claims carried by the session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use studio_core::types::UserId;
use studio_entity::user::{UserProfile, UserRole};

/// Claims payload of every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: UserId,
    /// Display name at the time of issuance.
    pub name: String,
    /// Email at the time of issuance.
    pub email: String,
    /// Role at the time of issuance; the access gate reads this.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Identity carried by the token.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.sub,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    /// Whether the holder may manage content.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Seconds since the token was issued.
    pub fn age_seconds(&self) -> i64 {
        Utc::now().timestamp() - self.iat
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
