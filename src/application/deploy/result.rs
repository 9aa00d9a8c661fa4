//! Deploy Result
//!
//! Outcome types for deploy operations.

use crate::domain::entities::SyncResult;
use crate::domain::value_objects::{InvalidationId, WaitOutcome};

/// What the deploy did about the CDN cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidationOutcome {
    /// Nothing was uploaded, so no request was made
    NotNeeded,
    /// Dry run: the paths a real run would invalidate
    DryRun { paths: Vec<String> },
    /// Invalidations were submitted; `waited` is empty unless waiting was requested
    Submitted {
        ids: Vec<InvalidationId>,
        waited: Vec<(InvalidationId, WaitOutcome)>,
    },
}

/// Result of a deploy operation
#[derive(Debug, Clone)]
pub struct DeploySummary {
    pub sync: SyncResult,
    pub invalidation: InvalidationOutcome,
}

impl DeploySummary {
    pub fn invalidation_ids(&self) -> &[InvalidationId] {
        match &self.invalidation {
            InvalidationOutcome::Submitted { ids, .. } => ids,
            _ => &[],
        }
    }

    /// Waits that ended in anything but `Completed`
    pub fn unfinished_waits(&self) -> Vec<&(InvalidationId, WaitOutcome)> {
        match &self.invalidation {
            InvalidationOutcome::Submitted { waited, .. } => waited
                .iter()
                .filter(|(_, outcome)| !outcome.is_completed())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether any file was (or in a dry run would be) uploaded
    pub fn has_changes(&self) -> bool {
        self.sync.has_changes()
    }
}
