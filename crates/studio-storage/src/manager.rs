//! Asset lifecycle on top of a storage provider.
//!
//! Every stored asset lives at `/uploads/{category}/{timestamp}-{name}`,
//! where the category comes from the MIME type and the timestamp is in
//! milliseconds. The path string returned to callers is the same one the
//! public site serves the file under.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::traits::StorageProvider;
use studio_core::types::{AssetCategory, UploadedFile};

/// Public path prefix of every managed asset.
pub const UPLOADS_PREFIX: &str = "/uploads/";

const FALLBACK_MIME: &str = "application/octet-stream";

/// A file that has been written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    /// Public path, e.g. `/uploads/images/1718000000000-facade.jpg`.
    pub path: String,
    /// Category directory the file went into.
    pub category: AssetCategory,
    /// MIME type used for classification.
    pub mime_type: String,
}

/// Outcome of a best-effort removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalReport {
    /// Paths that were unlinked.
    pub removed: Vec<String>,
    /// Paths that could not be unlinked, with the reason.
    pub failed: Vec<(String, String)>,
}

impl RemovalReport {
    /// Whether every requested path was removed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Just the failed paths.
    pub fn failed_paths(&self) -> Vec<&str> {
        self.failed.iter().map(|(path, _)| path.as_str()).collect()
    }
}

/// Stores, replaces, and releases uploaded assets.
#[derive(Debug, Clone)]
pub struct AssetManager {
    provider: Arc<dyn StorageProvider>,
}

impl AssetManager {
    /// Create a manager over a storage provider.
    pub fn new(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &Arc<dyn StorageProvider> {
        &self.provider
    }

    /// MIME type of an upload: the declared one, else a guess from the
    /// file name, else `application/octet-stream`.
    pub fn mime_type_of(upload: &UploadedFile) -> String {
        upload
            .content_type
            .as_deref()
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                mime_guess::from_path(&upload.file_name)
                    .first_raw()
                    .unwrap_or(FALLBACK_MIME)
                    .to_string()
            })
    }

    /// Write an upload under a fresh path in its category directory.
    pub async fn store(&self, upload: &UploadedFile) -> AppResult<StoredAsset> {
        let mime_type = Self::mime_type_of(upload);
        let category = AssetCategory::from_mime(&mime_type);
        let path = self.fresh_path(category, &upload.file_name).await?;

        self.provider.write(&path, upload.data.clone()).await?;

        info!(path = %path, bytes = upload.len(), mime = %mime_type, "Stored asset");
        Ok(StoredAsset {
            path,
            category,
            mime_type,
        })
    }

    /// Store several uploads, returning their paths in input order.
    ///
    /// If any write fails, files already written by this call are removed
    /// before the error is returned.
    pub async fn store_all(&self, uploads: &[UploadedFile]) -> AppResult<Vec<String>> {
        let mut paths = Vec::with_capacity(uploads.len());
        for upload in uploads {
            match self.store(upload).await {
                Ok(asset) => paths.push(asset.path),
                Err(e) => {
                    self.remove_all(&paths).await;
                    return Err(e);
                }
            }
        }
        Ok(paths)
    }

    /// Replace the content at an existing managed path, keeping the path.
    pub async fn overwrite(&self, path: &str, upload: &UploadedFile) -> AppResult<StoredAsset> {
        if !is_managed(path) {
            return Err(AppError::validation(format!(
                "Refusing to write outside the uploads directory: {path}"
            )));
        }

        let mime_type = Self::mime_type_of(upload);
        self.provider.write(path, upload.data.clone()).await?;

        info!(path, bytes = upload.len(), mime = %mime_type, "Overwrote asset");
        Ok(StoredAsset {
            path: path.to_string(),
            category: AssetCategory::from_mime(&mime_type),
            mime_type,
        })
    }

    /// Unlink every path independently. Never fails; problems are recorded
    /// in the report and logged.
    pub async fn remove_all<S: AsRef<str>>(&self, paths: &[S]) -> RemovalReport {
        let mut report = RemovalReport::default();

        for path in paths.iter().map(AsRef::as_ref) {
            if !is_managed(path) {
                warn!(path, "Skipping removal of path outside the uploads directory");
                report
                    .failed
                    .push((path.to_string(), "outside uploads directory".to_string()));
                continue;
            }

            match self.provider.delete(path).await {
                Ok(()) => report.removed.push(path.to_string()),
                Err(e) => {
                    warn!(path, error = %e, "Failed to remove asset");
                    report.failed.push((path.to_string(), e.message));
                }
            }
        }

        if report.is_clean() {
            debug!(removed = report.removed.len(), "Removed assets");
        } else {
            warn!(
                removed = report.removed.len(),
                failed = report.failed.len(),
                failed_paths = ?report.failed_paths(),
                "Some assets could not be removed"
            );
        }
        report
    }

    /// Pick an unused path for a new file.
    async fn fresh_path(&self, category: AssetCategory, file_name: &str) -> AppResult<String> {
        let name = sanitize_file_name(file_name);
        let stamp = Utc::now().timestamp_millis();

        let mut path = format!("{UPLOADS_PREFIX}{category}/{stamp}-{name}");
        let mut n = 1;
        while self.provider.exists(&path).await? {
            path = format!("{UPLOADS_PREFIX}{category}/{stamp}-{n}-{name}");
            n += 1;
        }
        Ok(path)
    }
}

/// Whether a path points inside the uploads directory.
pub fn is_managed(path: &str) -> bool {
    path.starts_with(UPLOADS_PREFIX) && !path.split('/').any(|segment| segment == "..")
}

/// Reduce a client-supplied name to a single safe path component.
fn sanitize_file_name(raw: &str) -> String {
    let last = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = last
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "file".to_string()
    } else {
        cleaned
    }
}
