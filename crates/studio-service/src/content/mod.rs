//! The owned-files document lifecycle shared by every collection.

pub mod service;
pub mod staged;

pub use service::ContentService;
pub use staged::StagedAssets;
