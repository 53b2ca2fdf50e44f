//! Products sold by the studio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studio_core::traits::Document;
use studio_core::types::ProductId;

/// A product with a non-empty image gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Image paths in display order.
    pub images: Vec<String>,
    /// Price, never negative.
    pub price: f64,
    /// Long description.
    pub description: String,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Document for Product {
    const COLLECTION: &'static str = "products";
    const LABEL: &'static str = "Product";
    const TITLE_FIELD: Option<&'static str> = Some("name");

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
        self.images.clone()
    }

    fn title(&self) -> Option<&str> {
        Some(&self.name)
    }
}
