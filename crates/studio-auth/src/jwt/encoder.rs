//! JWT token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

use studio_core::config::AuthConfig;
use studio_core::error::AppError;
use studio_entity::user::UserProfile;

use super::claims::Claims;

/// Creates signed session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

/// A freshly signed token and when it stops being valid.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// Compact JWS string.
    pub token: String,
    /// Expiration instant.
    pub expires_at: DateTime<Utc>,
    /// Lifetime in seconds, for the cookie `Max-Age`.
    pub max_age_seconds: i64,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: config.session_max_age_minutes as i64,
        }
    }

    /// Sign a token for the given identity, valid from now.
    pub fn issue(&self, profile: &UserProfile) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.ttl_minutes);

        let claims = Claims {
            sub: profile.id,
            name: profile.name.clone(),
            email: profile.email.clone(),
            role: profile.role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_at: exp,
            max_age_seconds: self.ttl_minutes * 60,
        })
    }
}
