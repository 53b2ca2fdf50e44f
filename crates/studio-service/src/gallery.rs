//! Office and general image galleries.

use uuid::Uuid;

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::types::{PageRequest, PageResponse, UploadedFile};
use studio_entity::{Gallery, GalleryKind};
use studio_storage::RemovalReport;

use crate::content::ContentService;
use crate::validation::supplied_all;

/// Operations on one gallery collection.
#[derive(Debug, Clone)]
pub struct GalleryService<K: GalleryKind> {
    content: ContentService<Gallery<K>>,
}

impl<K: GalleryKind> GalleryService<K> {
    /// Creates a new gallery service.
    pub fn new(content: ContentService<Gallery<K>>) -> Self {
        Self { content }
    }

    /// One page of galleries, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Gallery<K>>> {
        self.content.list(page).await
    }

    /// Upload a batch of images as a new gallery.
    pub async fn create(&self, images: Vec<UploadedFile>) -> AppResult<Gallery<K>> {
        let images = supplied_all(images);
        if images.is_empty() {
            return Err(AppError::validation("At least one image is required."));
        }

        let mut staged = self.content.stage();
        let paths = staged.store_all(&images).await?;
        self.content.create(Gallery::new(paths), staged).await
    }

    /// Delete a gallery and its images.
    pub async fn delete(&self, id: Uuid) -> AppResult<RemovalReport> {
        self.content.delete(id).await
    }
}
