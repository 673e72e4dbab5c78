use serde::{Deserialize, Serialize};
use std::fmt;
use super::validation::ValidationError;

pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Reference to a file held by the storage layer, e.g. `uploads/guide.pdf`.
///
/// Only the location is tracked here; moving bytes is the storage layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    upload_dir: String,
    name: String,
}

impl StoredFile {
    /// Places `name` under `upload_dir`. The name must be a single path segment.
    pub fn new(upload_dir: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let upload_dir = upload_dir.into().trim_end_matches('/').to_string();
        let name = name.into();
        if name.trim().is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(ValidationError::InvalidFileName(name));
        }
        Ok(Self { upload_dir, name })
    }

    pub fn in_default_dir(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(DEFAULT_UPLOAD_DIR, name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> String {
        if self.upload_dir.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.upload_dir, self.name)
        }
    }
}

impl fmt::Display for StoredFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_joins_upload_dir() {
        let file = StoredFile::in_default_dir("guide.pdf").unwrap();
        assert_eq!(file.path(), "uploads/guide.pdf");
        assert_eq!(file.name(), "guide.pdf");
        assert_eq!(file.to_string(), "uploads/guide.pdf");

        let file = StoredFile::new("media/uploads/", "song.mp3").unwrap();
        assert_eq!(file.path(), "media/uploads/song.mp3");
    }

    #[test]
    fn test_rejects_names_escaping_the_upload_dir() {
        for bad in ["", "  ", ".", "..", "../etc/passwd", "nested/file.zip", "c:\\file.zip"] {
            assert!(StoredFile::in_default_dir(bad).is_err(), "accepted {bad:?}");
        }
    }
}
