//! Core traits defined in `studio-core` and implemented by other crates.

pub mod document;
pub mod repository;
pub mod storage;

pub use document::Document;
pub use repository::DocumentRepository;
pub use storage::StorageProvider;
