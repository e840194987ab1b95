use std::fmt;

/// Location of an uploaded file relative to the upload directory:
/// `<owner_id>/<category_id>/<stored_filename>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(owner_id: &str, category_id: &str, stored_filename: &str) -> Self {
        Self(format!("{}/{}/{}", owner_id, category_id, stored_filename))
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
