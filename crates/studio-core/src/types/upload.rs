//! In-memory representation of a file received in a multipart form.

use bytes::Bytes;

/// A file part extracted from a request, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name as sent by the client.
    pub file_name: String,
    /// Declared MIME type, if the client sent one.
    pub content_type: Option<String>,
    /// Raw content.
    pub data: Bytes,
}

impl UploadedFile {
    /// Create a new upload.
    pub fn new(
        file_name: impl Into<String>,
        content_type: Option<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            data: data.into(),
        }
    }

    /// Browsers send an empty, nameless part when a file input is left
    /// blank; such parts do not count as a supplied file.
    pub fn is_empty(&self) -> bool {
        self.file_name.is_empty() && self.data.is_empty()
    }

    /// Size of the content in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }
}
