//! Fixtures for service tests.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use tempfile::TempDir;
use uuid::Uuid;

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::traits::{Document, DocumentRepository, StorageProvider};
use studio_core::types::{PageRequest, PageResponse, UploadedFile};
use studio_database::ContentStore;
use studio_database::memory::MemoryDocumentRepository;
use studio_storage::{AssetManager, LocalStorageProvider};

pub(crate) struct Fixture {
    pub dir: TempDir,
    pub store: ContentStore,
    pub assets: Arc<AssetManager>,
}

impl Fixture {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path()).await.unwrap();
        Self {
            store: ContentStore::memory(),
            assets: Arc::new(AssetManager::new(Arc::new(provider))),
            dir,
        }
    }

    /// A fixture whose disk accepts `allowed` writes and fails the rest.
    pub async fn with_write_limit(allowed: usize) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let inner = LocalStorageProvider::new(dir.path()).await.unwrap();
        let provider = LimitedWrites {
            inner,
            remaining: AtomicUsize::new(allowed),
        };
        Self {
            store: ContentStore::memory(),
            assets: Arc::new(AssetManager::new(Arc::new(provider))),
            dir,
        }
    }

    /// Whether a stored public path exists on disk.
    pub fn on_disk(&self, public_path: &str) -> bool {
        self.dir
            .path()
            .join(Path::new(public_path.trim_start_matches('/')))
            .is_file()
    }

    /// Number of files anywhere under the uploads directory.
    pub fn file_count(&self) -> usize {
        fn walk(dir: &Path) -> usize {
            std::fs::read_dir(dir)
                .map(|entries| {
                    entries
                        .flatten()
                        .map(|e| {
                            let path = e.path();
                            if path.is_dir() { walk(&path) } else { 1 }
                        })
                        .sum()
                })
                .unwrap_or(0)
        }
        walk(&self.dir.path().join("uploads"))
    }
}

pub(crate) fn image(name: &str) -> UploadedFile {
    UploadedFile::new(
        name,
        Some("image/jpeg".to_string()),
        Bytes::from(format!("content of {name}")),
    )
}

/// Local storage that runs out of space after a fixed number of writes.
#[derive(Debug)]
pub(crate) struct LimitedWrites {
    inner: LocalStorageProvider,
    remaining: AtomicUsize,
}

#[async_trait]
impl StorageProvider for LimitedWrites {
    fn provider_type(&self) -> &str {
        "limited"
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        self.inner.read_bytes(path).await
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let granted = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        if granted.is_err() {
            return Err(AppError::storage(format!("No space left writing {path}")));
        }
        self.inner.write(path, data).await
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        self.inner.delete(path).await
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        self.inner.exists(path).await
    }

    async fn create_dir(&self, path: &str) -> AppResult<()> {
        self.inner.create_dir(path).await
    }
}

/// A collection that reads normally but refuses every insert and update.
#[derive(Debug)]
pub(crate) struct ReadOnlyRepository<T> {
    pub inner: MemoryDocumentRepository<T>,
}

impl<T: Document> ReadOnlyRepository<T> {
    pub fn new() -> Self {
        Self {
            inner: MemoryDocumentRepository::new(),
        }
    }
}

#[async_trait]
impl<T: Document> DocumentRepository<T> for ReadOnlyRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<T>> {
        self.inner.find_by_id(id).await
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<T>> {
        self.inner.find_page(page).await
    }

    async fn find_first(&self) -> AppResult<Option<T>> {
        self.inner.find_first().await
    }

    async fn insert(&self, _doc: &T) -> AppResult<()> {
        Err(AppError::database("Database is read-only"))
    }

    async fn update(&self, _doc: &T) -> AppResult<bool> {
        Err(AppError::database("Database is read-only"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        self.inner.delete(id).await
    }

    async fn search_title(&self, needle: &str) -> AppResult<Vec<T>> {
        self.inner.search_title(needle).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.inner.count().await
    }
}
