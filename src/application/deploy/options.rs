//! Deploy Options
//!
//! Per-run settings for the deploy use case.

use std::path::PathBuf;
use std::time::Duration;

use crate::application::invalidate::DEFAULT_WAIT_TIMEOUT;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Local directory holding the built site
    pub source: PathBuf,
    /// Report what would change without uploading or invalidating
    pub dry_run: bool,
    /// Block until every submitted invalidation finishes
    pub wait: bool,
    /// Per-invalidation wait limit
    pub wait_timeout: Duration,
}

impl DeployOptions {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dry_run: false,
            wait: false,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }
}
