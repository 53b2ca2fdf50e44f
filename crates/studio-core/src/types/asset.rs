//! Coarse MIME categories used to partition the asset store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level directory an uploaded file is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    /// `image/*`
    Images,
    /// `video/*`
    Videos,
    /// `application/*`
    Documents,
    /// Everything else.
    Others,
}

impl AssetCategory {
    /// Every category, in directory listing order.
    pub const ALL: [AssetCategory; 4] = [Self::Images, Self::Videos, Self::Documents, Self::Others];

    /// Classify a MIME type by its prefix.
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Self::Images
        } else if mime.starts_with("video/") {
            Self::Videos
        } else if mime.starts_with("application/") {
            Self::Documents
        } else {
            Self::Others
        }
    }

    /// Directory name under the uploads root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Videos => "videos",
            Self::Documents => "documents",
            Self::Others => "others",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_by_prefix() {
        assert_eq!(AssetCategory::from_mime("image/png"), AssetCategory::Images);
        assert_eq!(AssetCategory::from_mime("VIDEO/mp4"), AssetCategory::Videos);
        assert_eq!(
            AssetCategory::from_mime("application/pdf"),
            AssetCategory::Documents
        );
        assert_eq!(AssetCategory::from_mime("text/plain"), AssetCategory::Others);
        assert_eq!(AssetCategory::from_mime(""), AssetCategory::Others);
    }
}
