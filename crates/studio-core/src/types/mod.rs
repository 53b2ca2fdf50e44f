//! Core type definitions used across the studio workspace.

pub mod asset;
pub mod id;
pub mod pagination;
pub mod upload;

pub use asset::AssetCategory;
pub use id::*;
pub use pagination::{PageRequest, PageResponse};
pub use upload::UploadedFile;
