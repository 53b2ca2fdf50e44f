//! Pagination query parameter extractor.

use serde::Deserialize;

use studio_core::types::PageRequest;

/// `?page=&limit=` as sent by the client.
///
/// Both are kept as raw strings so that garbage falls back to the defaults
/// (page 1, limit 10) instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}
