use std::fmt;

use super::upload_id::UploadId;

/// Location of a staged upload. Prefixed with the upload id so concurrent
/// requests can never collide in the shared staging area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(upload_id: &UploadId, filename: &str) -> Self {
        Self(format!("{}/{}", upload_id.as_uuid(), filename))
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
