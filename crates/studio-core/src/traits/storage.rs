//! Storage provider trait for the asset store backend.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for binary asset backends.
///
/// Paths are relative to the provider root and use `/` separators.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g. "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a file into memory.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Write bytes to a file, creating parent directories and replacing
    /// any existing content.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete a file. A missing file is a `NotFound` error.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether a file exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Create a directory (and any missing parents).
    async fn create_dir(&self, path: &str) -> AppResult<()>;
}
