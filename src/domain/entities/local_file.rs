//! Local File Entity

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ObjectKey;

/// A regular file found under the sync root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    absolute: PathBuf,
    relative: PathBuf,
}

impl LocalFile {
    pub fn new(absolute: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Self {
        Self {
            absolute: absolute.into(),
            relative: relative.into(),
        }
    }

    /// Build from an absolute path under `root`; `None` if it is not under it.
    pub fn under_root(root: &Path, absolute: &Path) -> Option<Self> {
        let relative = absolute.strip_prefix(root).ok()?;
        if relative.as_os_str().is_empty() {
            return None;
        }
        Some(Self::new(absolute, relative))
    }

    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Remote key this file is stored under.
    ///
    /// Fails with `InvalidData` when the relative path is not valid UTF-8.
    pub fn key(&self) -> io::Result<ObjectKey> {
        ObjectKey::from_relative_path(&self.relative).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file name is not valid UTF-8: {}", self.absolute.display()),
            )
        })
    }
}
