//! Studio team members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studio_core::traits::Document;
use studio_core::types::PersonId;

/// A member of the studio shown on the people page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier.
    pub id: PersonId,
    /// Full name.
    pub name: String,
    /// Job title, e.g. "Architect".
    pub role: String,
    /// Portrait path.
    pub image: String,
    /// Grouping on the people page, e.g. "Director".
    pub category: String,
    /// When the person was created.
    pub created_at: DateTime<Utc>,
    /// When the person was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Document for Person {
    const COLLECTION: &'static str = "people";
    const LABEL: &'static str = "Person";

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
        vec![self.image.clone()]
    }
}
