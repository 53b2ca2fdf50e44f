//! Journal posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studio_core::traits::Document;
use studio_core::types::PostId;

/// A journal entry with a cover image and ordered paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier.
    pub id: PostId,
    /// Headline.
    pub title: String,
    /// Cover image path.
    pub cover: String,
    /// Paragraphs in display order; never empty, no blank entries.
    pub description: Vec<String>,
    /// Topic label.
    pub topic: String,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Document for Post {
    const COLLECTION: &'static str = "posts";
    const LABEL: &'static str = "Post";
    const TITLE_FIELD: Option<&'static str> = Some("title");

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
        vec![self.cover.clone()]
    }

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }
}
