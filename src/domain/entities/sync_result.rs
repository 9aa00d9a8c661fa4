//! Sync Result Entity

use crate::domain::value_objects::ObjectKey;

/// Outcome of one sync pass
///
/// Keys appear in enumeration order. In a dry run `uploaded` holds the keys
/// that would have been uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncResult {
    /// Keys that were uploaded (or would be, in a dry run)
    pub uploaded: Vec<ObjectKey>,
    /// Keys whose remote content already matched
    pub skipped: Vec<ObjectKey>,
    /// Whether the pass ran without mutating the store
    pub dry_run: bool,
}

impl SyncResult {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Number of files evaluated
    pub fn total(&self) -> usize {
        self.uploaded.len() + self.skipped.len()
    }

    pub fn has_changes(&self) -> bool {
        !self.uploaded.is_empty()
    }

    /// CDN paths covering every uploaded key
    pub fn invalidation_paths(&self) -> Vec<String> {
        self.uploaded
            .iter()
            .map(ObjectKey::to_invalidation_path)
            .collect()
    }
}
