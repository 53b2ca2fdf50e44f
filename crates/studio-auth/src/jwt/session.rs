//! Session policy: a fixed lifetime plus sliding renewal.
//!
//! A token lives `session_max_age_minutes`. Once it is older than
//! `session_update_age_minutes`, any authenticated request gets a fresh
//! token with a full lifetime, so an active admin is never logged out
//! while an idle one is.

use tracing::debug;

use studio_core::config::AuthConfig;
use studio_core::error::AppError;
use studio_entity::user::UserProfile;

use super::claims::Claims;
use super::decoder::JwtDecoder;
use super::encoder::{IssuedToken, JwtEncoder};

/// Issues, verifies, and renews session tokens.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    update_age_seconds: i64,
}

impl SessionTokens {
    /// Build from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
            update_age_seconds: config.session_update_age_minutes as i64 * 60,
        }
    }

    /// Sign a new token for an identity.
    pub fn issue(&self, profile: &UserProfile) -> Result<IssuedToken, AppError> {
        self.encoder.issue(profile)
    }

    /// Verify a token.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        self.decoder.decode(token)
    }

    /// A replacement token if `claims` is past the renewal window.
    pub fn renew_if_stale(&self, claims: &Claims) -> Result<Option<IssuedToken>, AppError> {
        if claims.age_seconds() < self.update_age_seconds {
            return Ok(None);
        }
        debug!(user_id = %claims.sub, "Renewing session token");
        self.encoder.issue(&claims.profile()).map(Some)
    }
}
