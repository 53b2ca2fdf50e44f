//! Assets written during one operation, released again if it fails.

use std::sync::Arc;

use studio_core::result::AppResult;
use studio_core::types::UploadedFile;
use studio_storage::{AssetManager, StoredAsset};

/// Tracks files stored by a single create or update.
///
/// Nothing here is transactional: a crash between storing and persisting
/// leaves orphan files behind. It only guarantees that an operation which
/// fails with an error cleans up what it wrote.
#[derive(Debug)]
pub struct StagedAssets {
    assets: Arc<AssetManager>,
    paths: Vec<String>,
}

impl StagedAssets {
    /// Start an empty batch.
    pub fn new(assets: Arc<AssetManager>) -> Self {
        Self {
            assets,
            paths: Vec::new(),
        }
    }

    /// Store one upload under a new path.
    pub async fn store(&mut self, upload: &UploadedFile) -> AppResult<StoredAsset> {
        let stored = self.assets.store(upload).await?;
        self.paths.push(stored.path.clone());
        Ok(stored)
    }

    /// Store several uploads, in order.
    pub async fn store_all(&mut self, uploads: &[UploadedFile]) -> AppResult<Vec<String>> {
        let paths = self.assets.store_all(uploads).await?;
        self.paths.extend(paths.iter().cloned());
        Ok(paths)
    }

    /// Overwrite an existing path. Not tracked: the path already belongs
    /// to a persisted document.
    pub async fn overwrite(&mut self, path: &str, upload: &UploadedFile) -> AppResult<StoredAsset> {
        self.assets.overwrite(path, upload).await
    }

    /// Paths written so far.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Pass `result` through, removing every staged file if it is an error.
    pub async fn settle<T>(&mut self, result: AppResult<T>) -> AppResult<T> {
        if result.is_err() {
            self.rollback().await;
        }
        result
    }

    /// Remove every staged file.
    pub async fn rollback(&mut self) {
        if self.paths.is_empty() {
            return;
        }
        let paths = std::mem::take(&mut self.paths);
        self.assets.remove_all(&paths).await;
    }
}
