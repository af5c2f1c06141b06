use std::fmt;

use super::ImageId;

const UPLOAD_PREFIX: &str = "user_images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// Builds `user_images/{image_id}/{filename}`. Path separators in the
    /// client-supplied filename are flattened so it stays a single segment.
    pub fn new(image_id: &ImageId, filename: &str) -> Self {
        let segment: String = filename
            .trim()
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        let segment = match segment.as_str() {
            "" | "." | ".." => "upload".to_string(),
            _ => segment,
        };
        Self(format!("{}/{}/{}", UPLOAD_PREFIX, image_id.as_uuid(), segment))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
