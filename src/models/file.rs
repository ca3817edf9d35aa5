use serde::{Deserialize, Serialize};

/// File attached to an item, message or game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileObject {
    pub id: String,
    pub url: String,
    pub filename: Option<String>,
    pub mime: Option<String>,
}

impl FileObject {
    /// Check if the file is an image by its mime type
    pub fn is_image(&self) -> bool {
        self.mime
            .as_deref()
            .map(|m| m.starts_with("image/"))
            .unwrap_or(false)
    }
}
