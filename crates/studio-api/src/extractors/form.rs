//! Multipart form collector.
//!
//! Reads every part of a `multipart/form-data` body up front. Parts with a
//! file name become [`UploadedFile`]s, the rest become trimmed text values.
//! Repeated field names keep their order.

use std::collections::HashMap;

use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::StatusCode;

use studio_core::error::AppError;
use studio_core::types::UploadedFile;

/// All fields of a multipart form, grouped by name.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    texts: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<UploadedFile>>,
}

impl FormData {
    /// First value of a text field, or an empty string.
    pub fn text(&self, name: &str) -> String {
        self.opt_text(name).unwrap_or_default()
    }

    /// First non-blank value of a text field.
    pub fn opt_text(&self, name: &str) -> Option<String> {
        self.texts
            .get(name)?
            .iter()
            .find(|v| !v.is_empty())
            .cloned()
    }

    /// Every value of a repeated text field, blanks included.
    pub fn texts(&self, name: &str) -> Vec<String> {
        self.texts.get(name).cloned().unwrap_or_default()
    }

    /// Checkbox-style flag: `true`, `1`, or `on`.
    pub fn flag(&self, name: &str) -> bool {
        self.opt_text(name)
            .is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "on"))
    }

    /// First file of a file field.
    pub fn file(&self, name: &str) -> Option<UploadedFile> {
        self.files.get(name)?.first().cloned()
    }

    /// Every file of a repeated file field.
    pub fn files(&self, name: &str) -> Vec<UploadedFile> {
        self.files.get(name).cloned().unwrap_or_default()
    }

    fn push_text(&mut self, name: String, value: &str) {
        self.texts
            .entry(name)
            .or_default()
            .push(value.trim().to_string());
    }

    fn push_file(&mut self, name: String, file: UploadedFile) {
        self.files.entry(name).or_default().push(file);
    }
}

impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Expected a multipart form: {e}")))?;

        let mut form = FormData::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(read_error)?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name.is_empty() {
                continue;
            }

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let data = field
                        .bytes()
                        .await
                        .map_err(read_error)?;
                    form.push_file(name, UploadedFile::new(file_name, content_type, data));
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(read_error)?;
                    form.push_text(name, &text);
                }
            }
        }

        Ok(form)
    }
}

/// A body cut off by the upload limit is 413, any other broken part 400.
fn read_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large("Upload is too large.")
    } else {
        AppError::validation(format!("Multipart error: {e}"))
    }
}
