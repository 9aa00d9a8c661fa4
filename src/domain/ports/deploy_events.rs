//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Sync and invalidation logic report through this port and never print.

use std::path::PathBuf;

use crate::domain::value_objects::{InvalidationId, InvalidationStatus, ObjectKey, WaitOutcome};

/// Event emitted during deploy operations
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        source: PathBuf,
        destination: String,
        distribution_id: String,
        dry_run: bool,
    },

    /// Local files enumerated
    FilesDiscovered { count: usize },

    /// Evaluation of one file started
    FileStarted { index: usize, key: ObjectKey },

    /// File was uploaded (or would be, in a dry run)
    FileUploaded {
        index: usize,
        key: ObjectKey,
        dry_run: bool,
    },

    /// File already matched the remote copy
    FileSkipped {
        index: usize,
        key: ObjectKey,
        dry_run: bool,
    },

    /// File failed; the pass aborts after this event
    FileError {
        index: usize,
        key: ObjectKey,
        error: String,
    },

    /// Sync pass finished
    SyncCompleted {
        uploaded: usize,
        skipped: usize,
        dry_run: bool,
    },

    /// More paths than one request allows; multiple invalidations follow
    InvalidationSplit { path_count: usize, batch_count: usize },

    /// One invalidation request accepted by the CDN
    InvalidationCreated {
        id: InvalidationId,
        path_count: usize,
    },

    /// Dry run: paths that would have been invalidated
    InvalidationPlanned { paths: Vec<String> },

    /// Nothing uploaded, so nothing to invalidate
    InvalidationNotNeeded,

    /// Waiting on an invalidation started
    WaitStarted { id: InvalidationId },

    /// A status poll returned a non-terminal status
    WaitPolled {
        id: InvalidationId,
        status: InvalidationStatus,
    },

    /// Waiting ended
    WaitFinished {
        id: InvalidationId,
        outcome: WaitOutcome,
    },

    /// Deploy completed
    Completed {
        uploaded: usize,
        skipped: usize,
        invalidation_ids: Vec<InvalidationId>,
        dry_run: bool,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Colored progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants detailed events (e.g., per-file)
    ///
    /// Some sinks (like CI) may only want summary events.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
