//! PostgreSQL repository implementations.

pub mod document;
pub mod user;

pub use document::PgDocumentRepository;
pub use user::{PgUserRepository, UserStore};
