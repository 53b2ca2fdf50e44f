//! Authentication and session token configuration.

use serde::{Deserialize, Serialize};

/// Credential and session token settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Must be set.
    #[serde(default)]
    pub jwt_secret: String,
    /// Absolute session lifetime in minutes.
    #[serde(default = "default_max_age")]
    pub session_max_age_minutes: u64,
    /// Token age in minutes after which activity reissues it.
    #[serde(default = "default_update_age")]
    pub session_update_age_minutes: u64,
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the session cookie is marked `Secure`.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum password length accepted at signup.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            session_max_age_minutes: default_max_age(),
            session_update_age_minutes: default_update_age(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            password_min_length: default_password_min(),
        }
    }
}

fn default_max_age() -> u64 {
    30
}

fn default_update_age() -> u64 {
    5
}

fn default_cookie_name() -> String {
    "studio_session".to_string()
}

fn default_password_min() -> usize {
    6
}
