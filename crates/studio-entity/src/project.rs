//! Architecture projects shown on the work pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studio_core::traits::Document;
use studio_core::types::ProjectId;

/// An image with its caption data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Stored asset path.
    pub url: String,
    /// Alternative text.
    pub alt: String,
    /// Display name.
    pub name: String,
}

/// Optional facts listed beside a project. Keys keep their capitalised
/// wire names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    /// Year the studio was appointed.
    #[serde(rename = "AppointmentYear", default, skip_serializing_if = "Option::is_none")]
    pub appointment_year: Option<String>,
    /// Year the project was completed.
    #[serde(rename = "CompletionYear", default, skip_serializing_if = "Option::is_none")]
    pub completion_year: Option<String>,
    /// Client name.
    #[serde(rename = "Client", default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// Site location.
    #[serde(rename = "Location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A project with a required cover and an optional gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier.
    pub id: ProjectId,
    /// Project title.
    pub title: String,
    /// Category, e.g. "Residential".
    pub category: String,
    /// Cover image; url, alt and name are all required.
    pub cover: ImageRef,
    /// Gallery images in display order.
    #[serde(default)]
    pub images: Vec<ImageRef>,
    /// Long description.
    pub description: Option<String>,
    /// Embedded map reference.
    pub map_location: Option<String>,
    /// Optional facts.
    #[serde(default)]
    pub details: ProjectDetails,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Document for Project {
    const COLLECTION: &'static str = "projects";
    const LABEL: &'static str = "Project";
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
        std::iter::once(self.cover.url.clone())
            .chain(self.images.iter().map(|img| img.url.clone()))
            .collect()
    }

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }
}
