//! # studio-auth
//!
//! Credential primitives for the studio site.
//!
//! ## Modules
//!
//! - `jwt`: session token claims, signing, verification, and sliding renewal
//! - `password`: Argon2id hashing and signup input policy

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, SessionTokens};
pub use password::{PasswordHasher, PasswordValidator};
