//! Media library entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studio_core::traits::Document;
use studio_core::types::{AssetCategory, MediaId};

/// A standalone uploaded file with optional caption data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Unique identifier.
    pub id: MediaId,
    /// Category directory the file was filed under.
    #[serde(rename = "type")]
    pub kind: AssetCategory,
    /// Public path of the stored file.
    pub url: String,
    /// MIME type of the current content.
    pub mime_type: Option<String>,
    /// Display title.
    pub title: Option<String>,
    /// Alternative text.
    pub alt: Option<String>,
    /// Name of the file as uploaded.
    pub original_file_name: Option<String>,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Document for Media {
    const COLLECTION: &'static str = "media";
    const LABEL: &'static str = "Media";

    fn id(&self) -> Uuid {
        self.id.into_uuid()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn owned_files(&self) -> Vec<String> {
        vec![self.url.clone()]
    }
}
