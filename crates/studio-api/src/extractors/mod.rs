//! Custom Axum extractors.

pub mod form;
pub mod pagination;
pub mod query;

pub use form::FormData;
pub use pagination::PaginationParams;
pub use query::IdQuery;
