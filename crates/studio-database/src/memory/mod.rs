//! In-memory backends keyed by id, for development and tests.
//!
//! Nothing here survives a restart.

pub mod document;
pub mod user;

pub use document::MemoryDocumentRepository;
pub use user::MemoryUserRepository;
