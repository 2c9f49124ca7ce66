use std::path::Path;

use validator::Validate;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A file received through the multipart upload form
#[derive(Debug, Clone, Validate)]
pub struct UploadedFile {
    #[validate(length(min = 1, message = "file name is required"))]
    pub file_name: String,
    #[validate(length(min = 1, message = "file is empty"))]
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// Case-sensitive extension check, `extension` given without the dot
    pub fn has_extension(&self, extension: &str) -> bool {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == extension)
            .unwrap_or(false)
    }

    /// Decode the upload as UTF-8
    ///
    /// A leading byte order mark is dropped and invalid sequences become U+FFFD.
    pub fn decode_text(&self) -> String {
        let bytes = self.content.strip_prefix(UTF8_BOM).unwrap_or(self.content.as_slice());
        String::from_utf8_lossy(bytes).into_owned()
    }
}
