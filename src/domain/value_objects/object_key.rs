//! Object Key Value Object
//!
//! Remote keys are relative paths with `/` separators, whatever the platform.

use std::fmt;
use std::path::Path;

/// Key of an object in the remote bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Create a key, normalizing `\` separators to `/`
    pub fn new(key: impl Into<String>) -> Self {
        let key: String = key.into();
        Self(key.replace('\\', "/"))
    }

    /// Derive a key from a path relative to the sync root.
    ///
    /// Returns `None` when the path is not valid UTF-8.
    pub fn from_relative_path(relative: &Path) -> Option<Self> {
        relative.to_str().map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path used to purge this object from the CDN cache
    pub fn to_invalidation_path(&self) -> String {
        normalize_invalidation_path(&self.0)
    }
}

/// Normalize a path for a CDN invalidation: `/` separators and a leading `/`.
pub fn normalize_invalidation_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
