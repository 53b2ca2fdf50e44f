//! Signup input policy.

use validator::ValidateEmail;

use studio_core::config::AuthConfig;
use studio_core::error::AppError;

/// Checks the email and password supplied at signup.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against the configured length.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long.",
                self.min_length
            )));
        }
        Ok(())
    }

    /// Require a `local@domain.tld` shaped address.
    pub fn validate_email(&self, email: &str) -> Result<(), AppError> {
        let email = email.trim();
        let has_tld = email
            .rsplit_once('@')
            .and_then(|(_, domain)| domain.rsplit_once('.'))
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());

        if has_tld && email.validate_email() {
            Ok(())
        } else {
            Err(AppError::validation("Invalid email address."))
        }
    }
}
