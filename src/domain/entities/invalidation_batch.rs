//! Invalidation Batch Entity
//!
//! One CDN invalidation request: a bounded list of rooted paths plus a caller
//! reference that keeps the CDN from deduplicating distinct requests.

use crate::domain::value_objects::normalize_invalidation_path;

/// Maximum number of paths the CDN accepts in one invalidation request
pub const MAX_BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationBatch {
    paths: Vec<String>,
    caller_reference: String,
}

impl InvalidationBatch {
    /// Create a single batch with a fresh caller reference.
    ///
    /// Paths are normalized to start with `/`. The caller is responsible for
    /// respecting the batch size limit; use [`InvalidationBatch::chunked`].
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths: Vec<String> = paths
            .into_iter()
            .map(|p| normalize_invalidation_path(p.as_ref()))
            .collect();
        let caller_reference = new_caller_reference(paths.len());
        Self {
            paths,
            caller_reference,
        }
    }

    /// Split paths into consecutive batches of at most `max_size` paths.
    ///
    /// Every batch gets its own caller reference. No paths means no batches.
    pub fn chunked<I, S>(paths: I, max_size: usize) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let max_size = max_size.max(1);
        let normalized: Vec<String> = paths
            .into_iter()
            .map(|p| normalize_invalidation_path(p.as_ref()))
            .collect();

        normalized
            .chunks(max_size)
            .map(|chunk| Self::new(chunk.iter()))
            .collect()
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn caller_reference(&self) -> &str {
        &self.caller_reference
    }
}

fn new_caller_reference(path_count: usize) -> String {
    format!(
        "deploy-{}-files-{}-{}",
        path_count,
        chrono::Utc::now().timestamp(),
        uuid::Uuid::new_v4().simple()
    )
}
