//! In-memory document repository using dashmap.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use studio_core::result::AppResult;
use studio_core::traits::{Document, DocumentRepository};
use studio_core::types::{PageRequest, PageResponse};

/// One collection held in a concurrent map.
#[derive(Debug)]
pub struct MemoryDocumentRepository<T> {
    docs: Arc<DashMap<Uuid, T>>,
}

impl<T> Clone for MemoryDocumentRepository<T> {
    fn clone(&self) -> Self {
        Self {
            docs: Arc::clone(&self.docs),
        }
    }
}

impl<T> Default for MemoryDocumentRepository<T> {
    fn default() -> Self {
        Self {
            docs: Arc::new(DashMap::new()),
        }
    }
}

impl<T: Document> MemoryDocumentRepository<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every document, newest first.
    fn newest_first(&self) -> Vec<T> {
        let mut all: Vec<T> = self.docs.iter().map(|entry| entry.value().clone()).collect();
        all.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        all
    }
}

#[async_trait]
impl<T: Document> DocumentRepository<T> for MemoryDocumentRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<T>> {
        Ok(self.docs.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<T>> {
        Ok(PageResponse::from_sorted(self.newest_first(), page))
    }

    async fn find_first(&self) -> AppResult<Option<T>> {
        Ok(self.newest_first().pop())
    }

    async fn insert(&self, doc: &T) -> AppResult<()> {
        self.docs.insert(doc.id(), doc.clone());
        Ok(())
    }

    async fn update(&self, doc: &T) -> AppResult<bool> {
        match self.docs.get_mut(&doc.id()) {
            Some(mut entry) => {
                *entry = doc.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.docs.remove(&id).is_some())
    }

    async fn search_title(&self, needle: &str) -> AppResult<Vec<T>> {
        if T::TITLE_FIELD.is_none() {
            return Ok(Vec::new());
        }
        let needle = needle.to_lowercase();
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|doc| {
                doc.title()
                    .is_some_and(|title| title.to_lowercase().contains(&needle))
            })
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.docs.len() as u64)
    }
}
