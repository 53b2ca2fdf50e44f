//! Generic document-with-owned-files service.
//!
//! Entity services validate their input and decide which files to store;
//! this type handles persistence and the asset bookkeeping around it:
//! new files are removed if persisting fails, files an update no longer
//! references are released afterwards, and a delete removes the document
//! and then every file it owned.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use studio_core::result::AppResult;
use studio_core::traits::{Document, DocumentRepository};
use studio_core::types::{PageRequest, PageResponse};
use studio_storage::{AssetManager, RemovalReport};

use super::staged::StagedAssets;
use crate::validation::not_found;

/// Lifecycle operations for one collection.
pub struct ContentService<T: Document> {
    repo: Arc<dyn DocumentRepository<T>>,
    assets: Arc<AssetManager>,
}

impl<T: Document> Clone for ContentService<T> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            assets: Arc::clone(&self.assets),
        }
    }
}

impl<T: Document> std::fmt::Debug for ContentService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService")
            .field("collection", &T::COLLECTION)
            .finish()
    }
}

impl<T: Document> ContentService<T> {
    /// Creates a new content service.
    pub fn new(repo: Arc<dyn DocumentRepository<T>>, assets: Arc<AssetManager>) -> Self {
        Self { repo, assets }
    }

    /// Begin tracking files for one operation.
    pub fn stage(&self) -> StagedAssets {
        StagedAssets::new(Arc::clone(&self.assets))
    }

    /// One page, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<T>> {
        self.repo.find_page(page).await
    }

    /// Fetch by id.
    pub async fn get(&self, id: Uuid) -> AppResult<T> {
        self.repo.find_by_id(id).await?.ok_or_else(not_found::<T>)
    }

    /// The oldest document, if any.
    pub async fn first(&self) -> AppResult<Option<T>> {
        self.repo.find_first().await
    }

    /// Title search, newest first.
    pub async fn search(&self, needle: &str) -> AppResult<Vec<T>> {
        self.repo.search_title(needle).await
    }

    /// Persist a new document whose files are already staged.
    pub async fn create(&self, doc: T, mut staged: StagedAssets) -> AppResult<T> {
        let persisted = self.repo.insert(&doc).await;
        staged.settle(persisted).await?;

        info!(
            collection = T::COLLECTION,
            id = %doc.id(),
            files = staged.paths().len(),
            "Created document"
        );
        Ok(doc)
    }

    /// Persist an edited document and release files it no longer owns.
    pub async fn update(&self, before: &T, mut after: T, mut staged: StagedAssets) -> AppResult<T> {
        after.touch();

        let persisted = match self.repo.update(&after).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(not_found::<T>()),
            Err(e) => Err(e),
        };
        staged.settle(persisted).await?;

        let still_owned: HashSet<String> = after.owned_files().into_iter().collect();
        let released: Vec<String> = before
            .owned_files()
            .into_iter()
            .filter(|path| !still_owned.contains(path))
            .collect();
        if !released.is_empty() {
            self.assets.remove_all(&released).await;
        }

        info!(
            collection = T::COLLECTION,
            id = %after.id(),
            added = staged.paths().len(),
            released = released.len(),
            "Updated document"
        );
        Ok(after)
    }

    /// Delete a document, then make a best-effort attempt at its files.
    ///
    /// Succeeds once the document is gone, whatever the report says.
    pub async fn delete(&self, id: Uuid) -> AppResult<RemovalReport> {
        let doc = self.get(id).await?;

        if !self.repo.delete(id).await? {
            return Err(not_found::<T>());
        }

        let report = self.assets.remove_all(&doc.owned_files()).await;
        if !report.is_clean() {
            warn!(
                collection = T::COLLECTION,
                id = %id,
                failed = report.failed.len(),
                failed_paths = ?report.failed_paths(),
                "Document deleted but some files remain"
            );
        }
        info!(collection = T::COLLECTION, id = %id, "Deleted document");
        Ok(report)
    }
}
