//! Request DTOs.

use serde::Deserialize;

use studio_service::{SigninInput, SignupInput};

use crate::extractors::PaginationParams;

/// Signup body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<SignupRequest> for SignupInput {
    fn from(req: SignupRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
        }
    }
}

/// Signin body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

impl From<SigninRequest> for SigninInput {
    fn from(req: SigninRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

/// `GET /api/search` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl SearchParams {
    /// The paging part of the query.
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page.clone(),
            limit: self.limit.clone(),
        }
    }
}
