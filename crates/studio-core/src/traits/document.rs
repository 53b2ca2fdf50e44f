//! The shape every content collection shares.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// A stored document that exclusively owns zero or more asset files.
///
/// One implementation per entity lets repositories and the content
/// service handle every collection with the same code.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Table (or map) name of the collection.
    const COLLECTION: &'static str;
    /// Human-readable singular name used in messages ("Person", "Post").
    const LABEL: &'static str;
    /// JSON field matched by free-text search, if the collection is searchable.
    const TITLE_FIELD: Option<&'static str> = None;

    /// Primary key.
    fn id(&self) -> Uuid;

    /// Creation timestamp; lists sort on it, newest first.
    fn created_at(&self) -> DateTime<Utc>;

    /// Stamp the document as modified now.
    fn touch(&mut self);

    /// Every asset path this document owns.
    fn owned_files(&self) -> Vec<String>;

    /// Value of [`Self::TITLE_FIELD`], used by in-memory search.
    fn title(&self) -> Option<&str> {
        None
    }
}
