//! Generic document repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;
use crate::traits::document::Document;
use crate::types::pagination::{PageRequest, PageResponse};

/// CRUD and query access to one document collection.
///
/// Implemented once per backend, generically over the document type.
#[async_trait]
pub trait DocumentRepository<T: Document>: Send + Sync + 'static {
    /// Find a document by its primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<T>>;

    /// One page of documents, newest first.
    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<T>>;

    /// The oldest document in the collection, if any.
    async fn find_first(&self) -> AppResult<Option<T>>;

    /// Persist a new document.
    async fn insert(&self, doc: &T) -> AppResult<()>;

    /// Replace an existing document. Returns `false` if it no longer exists.
    async fn update(&self, doc: &T) -> AppResult<bool>;

    /// Delete a document by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Case-insensitive substring match on the title field, newest first.
    ///
    /// Collections without a title field return an empty list.
    async fn search_title(&self, needle: &str) -> AppResult<Vec<T>>;

    /// Count all documents.
    async fn count(&self) -> AppResult<u64>;
}
