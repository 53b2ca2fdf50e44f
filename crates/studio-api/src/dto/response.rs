//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use studio_auth::Claims;
use studio_entity::UserProfile;
use studio_service::SignedIn;
use studio_storage::RemovalReport;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a delete.
///
/// The delete succeeded once the document is gone; assets that could not
/// be unlinked are listed for operators but do not fail the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_assets: Vec<String>,
}

impl DeletedResponse {
    /// `"{label} deleted successfully."` plus any leftover assets.
    pub fn new(label: &str, report: &RemovalReport) -> Self {
        Self {
            message: format!("{label} deleted successfully."),
            failed_assets: report
                .failed_paths()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Current session identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: UserProfile,
    pub expires_at: DateTime<Utc>,
}

impl From<&Claims> for SessionResponse {
    fn from(claims: &Claims) -> Self {
        Self {
            user: claims.profile(),
            expires_at: claims.expires_at(),
        }
    }
}

/// Successful sign-in. The token is also set as the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedInResponse {
    pub user: UserProfile,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<SignedIn> for SignedInResponse {
    fn from(signed_in: SignedIn) -> Self {
        Self {
            user: signed_in.user,
            token: signed_in.token.token,
            expires_at: signed_in.token.expires_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub server_status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    /// Content store backend.
    pub store: String,
}
