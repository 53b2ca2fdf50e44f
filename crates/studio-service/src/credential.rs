//! Account creation, sign-in, and session inspection.

use std::sync::Arc;

use tracing::{info, warn};

use studio_auth::{Claims, IssuedToken, PasswordHasher, PasswordValidator, SessionTokens};
use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_database::UserStore;
use studio_entity::user::{NewUser, UserProfile, UserRole};

/// Signup form.
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Signin form.
#[derive(Debug, Clone, Default)]
pub struct SigninInput {
    pub email: String,
    pub password: String,
}

/// A verified identity and its fresh session token.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: UserProfile,
    pub token: IssuedToken,
}

/// Handles accounts and session tokens.
#[derive(Debug, Clone)]
pub struct CredentialService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    tokens: Arc<SessionTokens>,
}

impl CredentialService {
    /// Creates a new credential service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        tokens: Arc<SessionTokens>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            tokens,
        }
    }

    /// Register a new account with the `user` role.
    pub async fn signup(&self, input: SignupInput) -> AppResult<UserProfile> {
        let name = input.name.trim();
        let email = input.email.trim();
        if name.is_empty() || email.is_empty() || input.password.is_empty() {
            return Err(AppError::validation(
                "Name, email and password are required.",
            ));
        }
        self.validator.validate_email(email)?;
        self.validator.validate(&input.password)?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self
            .users
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role: UserRole::default(),
            })
            .await?;

        info!(user_id = %user.id, "User signed up");
        Ok(user.profile())
    }

    /// Verify credentials and issue a session token.
    pub async fn signin(&self, input: SigninInput) -> AppResult<SignedIn> {
        let email = input.email.trim();
        if email.is_empty() || input.password.is_empty() {
            return Err(AppError::validation("Email and password are required."));
        }

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found."))?;

        if !self
            .hasher
            .verify_password(&input.password, &user.password_hash)?
        {
            warn!(user_id = %user.id, "Sign-in rejected: wrong password");
            return Err(AppError::authentication("Invalid credentials."));
        }

        let profile = user.profile();
        let token = self.tokens.issue(&profile)?;
        info!(user_id = %user.id, role = %user.role, "User signed in");
        Ok(SignedIn {
            user: profile,
            token,
        })
    }

    /// Verify a session token, renewing it when past the update window.
    pub fn session(&self, token: &str) -> AppResult<(Claims, Option<IssuedToken>)> {
        let claims = self.tokens.verify(token)?;
        let renewed = self.tokens.renew_if_stale(&claims)?;
        Ok((claims, renewed))
    }

    /// Every account without credentials.
    pub async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
        Ok(self
            .users
            .list()
            .await?
            .iter()
            .map(|u| u.profile())
            .collect())
    }

    /// Token issuer shared with the access gate.
    pub fn tokens(&self) -> &Arc<SessionTokens> {
        &self.tokens
    }
}
