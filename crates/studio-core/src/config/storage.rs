//! Asset storage configuration.

use serde::{Deserialize, Serialize};

/// Where uploaded assets live on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory served as the public web root; uploads go below it.
    #[serde(default = "default_public_root")]
    pub public_root: String,
    /// Maximum request body size in bytes (default 50 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_root: default_public_root(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_public_root() -> String {
    "./public".to_string()
}

fn default_max_upload() -> u64 {
    52_428_800 // 50 MB
}
