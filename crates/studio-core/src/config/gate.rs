//! Access gate configuration.

use serde::{Deserialize, Serialize};

/// Which paths require an admin session, and where to send everyone else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Path prefixes considered private.
    #[serde(default = "default_private_prefixes")]
    pub private_prefixes: Vec<String>,
    /// Sign-in page; receives the original path as `callbackUrl`.
    #[serde(default = "default_signin_path")]
    pub signin_path: String,
    /// Page shown to authenticated users lacking the admin role.
    #[serde(default = "default_unauthorized_path")]
    pub unauthorized_path: String,
    /// Role claim value that passes the gate.
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            private_prefixes: default_private_prefixes(),
            signin_path: default_signin_path(),
            unauthorized_path: default_unauthorized_path(),
            admin_role: default_admin_role(),
        }
    }
}

impl GateConfig {
    /// Whether a request path falls under one of the private prefixes.
    ///
    /// A prefix matches the path itself or anything below it, so
    /// `/api/people/new` covers `/api/people/new/` but not `/api/people/newest`.
    pub fn is_private(&self, path: &str) -> bool {
        self.private_prefixes.iter().any(|prefix| {
            let prefix = prefix.trim_end_matches('/');
            match path.strip_prefix(prefix) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            }
        })
    }
}

fn default_private_prefixes() -> Vec<String> {
    [
        "/admin",
        "/api/gallery/general/manage",
        "/api/gallery/office/manage",
        "/api/media/delete",
        "/api/media/upload",
        "/api/people/delete",
        "/api/people/new",
        "/api/people/update",
        "/api/posts/manage",
        "/api/products/delete",
        "/api/products/new",
        "/api/products/update",
        "/api/projects/delete",
        "/api/projects/new",
        "/api/projects/update",
        "/api/manage-site/new",
        "/api/manage-site/update",
        "/api/manage-site/delete",
        "/api/users/all",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

fn default_signin_path() -> String {
    "/signin".to_string()
}

fn default_unauthorized_path() -> String {
    "/unauthorized".to_string()
}

fn default_admin_role() -> String {
    "admin".to_string()
}
