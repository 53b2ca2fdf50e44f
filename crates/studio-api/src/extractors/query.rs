//! `?id=` parameter used by the delete and update routes.

use serde::Deserialize;
use uuid::Uuid;

use studio_core::result::AppResult;
use studio_core::traits::Document;
use studio_service::validation::{parse_id, require_id};

/// Query string carrying a document id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    /// The id of a `T`: missing is a validation error, malformed is not found.
    pub fn resolve<T: Document>(&self) -> AppResult<Uuid> {
        parse_id::<T>(require_id(self.id.as_deref())?)
    }
}
