//! Media library: standalone uploads with optional captions.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use studio_core::result::AppResult;
use studio_core::types::{MediaId, PageRequest, PageResponse, UploadedFile};
use studio_entity::Media;
use studio_storage::RemovalReport;

use crate::content::ContentService;
use crate::validation::{optional_text, require_file, supplied};

/// A new upload.
#[derive(Debug, Clone, Default)]
pub struct MediaUpload {
    pub file: Option<UploadedFile>,
    pub title: Option<String>,
    pub alt: Option<String>,
}

/// Changes to an existing entry. Blank captions keep the old value.
#[derive(Debug, Clone, Default)]
pub struct MediaEdit {
    pub file: Option<UploadedFile>,
    pub title: Option<String>,
    pub alt: Option<String>,
}

/// Media library operations.
#[derive(Debug, Clone)]
pub struct MediaService {
    content: ContentService<Media>,
}

impl MediaService {
    /// Creates a new media service.
    pub fn new(content: ContentService<Media>) -> Self {
        Self { content }
    }

    /// One page of entries, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Media>> {
        self.content.list(page).await
    }

    /// A single entry.
    pub async fn get(&self, id: Uuid) -> AppResult<Media> {
        self.content.get(id).await
    }

    /// Store a file and record it.
    pub async fn upload(&self, input: MediaUpload) -> AppResult<Media> {
        let file = require_file(input.file, "File")?;

        let mut staged = self.content.stage();
        let stored = staged.store(&file).await?;

        let now = Utc::now();
        let media = Media {
            id: MediaId::new(),
            kind: stored.category,
            url: stored.path,
            mime_type: Some(stored.mime_type),
            title: optional_text(input.title),
            alt: optional_text(input.alt),
            original_file_name: Some(file.file_name.clone()).filter(|n| !n.is_empty()),
            created_at: now,
            updated_at: now,
        };

        self.content.create(media, staged).await
    }

    /// Replace the file in place and/or edit captions.
    pub async fn update(&self, id: Uuid, input: MediaEdit) -> AppResult<Media> {
        let before = self.content.get(id).await?;
        let mut after = before.clone();

        if let Some(title) = optional_text(input.title) {
            after.title = Some(title);
        }
        if let Some(alt) = optional_text(input.alt) {
            after.alt = Some(alt);
        }

        let mut staged = self.content.stage();
        if let Some(file) = supplied(input.file) {
            let replaced = staged.overwrite(&before.url, &file).await?;
            info!(id = %id, path = %replaced.path, "Replaced media file");
            after.mime_type = Some(replaced.mime_type);
            after.original_file_name = Some(file.file_name.clone()).filter(|n| !n.is_empty());
        }

        self.content.update(&before, after, staged).await
    }

    /// Delete the entry and its file.
    pub async fn delete(&self, id: Uuid) -> AppResult<RemovalReport> {
        self.content.delete(id).await
    }
}
