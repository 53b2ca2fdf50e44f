//! Input checks shared by every service.

use std::str::FromStr;

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::traits::Document;
use studio_core::types::UploadedFile;
use uuid::Uuid;

/// Run derived validation and fold every failure into one message.
///
/// Messages are ordered by field name so the output is stable.
pub fn check(input: &impl Validate) -> AppResult<()> {
    input.validate().map_err(|errors| {
        let mut messages = Vec::new();
        collect(&errors, "", &mut messages);
        messages.sort();
        messages.dedup();
        AppError::validation(
            messages
                .into_iter()
                .map(|(_, message)| message)
                .collect::<Vec<_>>()
                .join(" "),
        )
    })
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = format!("{prefix}{field}");
        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid."));
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &format!("{path}."), out),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect(inner, &format!("{path}."), out);
                }
            }
        }
    }
}

/// Custom validator: rejects empty or whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Trim an optional value, turning blank into `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Treat an empty file part the same as a missing one.
pub fn supplied(file: Option<UploadedFile>) -> Option<UploadedFile> {
    file.filter(|f| !f.is_empty())
}

/// A file that must be present.
pub fn require_file(file: Option<UploadedFile>, label: &str) -> AppResult<UploadedFile> {
    supplied(file).ok_or_else(|| AppError::validation(format!("{label} is required.")))
}

/// Drop empty file parts from a repeated field.
pub fn supplied_all(files: Vec<UploadedFile>) -> Vec<UploadedFile> {
    files.into_iter().filter(|f| !f.is_empty()).collect()
}

/// The `id` query parameter, which must be present.
pub fn require_id(raw: Option<&str>) -> AppResult<&str> {
    raw.map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::validation("ID is required."))
}

/// Parse an identifier. An id that cannot exist is reported as not found.
pub fn parse_id<T: Document>(raw: &str) -> AppResult<Uuid> {
    Uuid::from_str(raw.trim()).map_err(|_| not_found::<T>())
}

/// Standard not-found error for a collection.
pub fn not_found<T: Document>() -> AppError {
    AppError::not_found(format!("{} not found.", T::LABEL))
}

/// Paths listed in a removal field.
///
/// Accepts a JSON array in a single value (`["/uploads/a.jpg"]`) or one
/// path per repeated value; blank values are ignored.
pub fn path_list(values: &[String]) -> AppResult<Vec<String>> {
    let mut paths = Vec::new();
    for value in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        if value.starts_with('[') {
            let parsed: Vec<String> = serde_json::from_str(value)
                .map_err(|_| AppError::validation("Invalid list of images to remove."))?;
            paths.extend(parsed.into_iter().filter(|p| !p.trim().is_empty()));
        } else {
            paths.push(value.to_string());
        }
    }
    Ok(paths)
}

/// Keep `originals` in order minus `removed`, then append `added`.
pub fn merge_kept(originals: &[String], removed: &[String], added: Vec<String>) -> Vec<String> {
    originals
        .iter()
        .filter(|path| !removed.contains(path))
        .cloned()
        .chain(added)
        .collect()
}
