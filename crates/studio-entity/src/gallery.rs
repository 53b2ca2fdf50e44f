//! Image galleries. The office and general galleries share one shape and
//! differ only in the collection they are stored in.

use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studio_core::traits::Document;
use studio_core::types::GalleryId;

/// Marker selecting which gallery collection a [`Gallery`] belongs to.
pub trait GalleryKind: Send + Sync + 'static {
    /// Backing collection.
    const COLLECTION: &'static str;
    /// Label used in messages.
    const LABEL: &'static str;
}

/// Photos of the studio office.
#[derive(Debug, Clone, Copy)]
pub struct Office;

/// General-purpose gallery.
#[derive(Debug, Clone, Copy)]
pub struct General;

impl GalleryKind for Office {
    const COLLECTION: &'static str = "office_galleries";
    const LABEL: &'static str = "Office gallery";
}

impl GalleryKind for General {
    const COLLECTION: &'static str = "general_galleries";
    const LABEL: &'static str = "General gallery";
}

/// A batch of uploaded gallery images.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct Gallery<K: GalleryKind> {
    pub id: GalleryId,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    kind: PhantomData<fn() -> K>,
}

/// Office gallery document.
pub type OfficeGallery = Gallery<Office>;
/// General gallery document.
pub type GeneralGallery = Gallery<General>;

impl<K: GalleryKind> Gallery<K> {
    /// Start a new gallery holding already-stored image paths.
    pub fn new(images: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: GalleryId::new(),
            images,
            created_at: now,
            updated_at: now,
            kind: PhantomData,
        }
    }
}

// Manual impls: derives would require `K: Clone + Debug`.
impl<K: GalleryKind> Clone for Gallery<K> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            images: self.images.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            kind: PhantomData,
        }
    }
}

impl<K: GalleryKind> fmt::Debug for Gallery<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::LABEL)
            .field("id", &self.id)
            .field("images", &self.images)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl<K: GalleryKind> Document for Gallery<K> {
    const COLLECTION: &'static str = K::COLLECTION;
    const LABEL: &'static str = K::LABEL;

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
}
