//! # studio-storage
//!
//! Asset storage for the studio site. [`AssetManager`] owns the lifecycle
//! of uploaded files (store, overwrite, best-effort removal) on top of a
//! [`studio_core::traits::StorageProvider`], which for now is always the
//! local filesystem under the public web root.

pub mod manager;
pub mod providers;

pub use manager::{AssetManager, RemovalReport, StoredAsset, UPLOADS_PREFIX};
pub use providers::local::LocalStorageProvider;
