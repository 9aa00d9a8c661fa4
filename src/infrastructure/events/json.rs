//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// NDJSON form of one event
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            source,
            destination,
            distribution_id,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "source": source.display().to_string(),
            "destination": destination,
            "distribution_id": distribution_id,
            "dry_run": dry_run,
        }),

        DeployEvent::FilesDiscovered { count } => serde_json::json!({
            "event": "files_discovered",
            "count": count,
        }),

        DeployEvent::FileStarted { index, key } => serde_json::json!({
            "event": "item_start",
            "index": index,
            "key": key.as_str(),
        }),

        DeployEvent::FileUploaded {
            index,
            key,
            dry_run,
        } => serde_json::json!({
            "event": "item_uploaded",
            "index": index,
            "key": key.as_str(),
            "dry_run": dry_run,
        }),

        DeployEvent::FileSkipped {
            index,
            key,
            dry_run,
        } => serde_json::json!({
            "event": "item_skipped",
            "index": index,
            "key": key.as_str(),
            "dry_run": dry_run,
        }),

        DeployEvent::FileError { index, key, error } => serde_json::json!({
            "event": "item_error",
            "index": index,
            "key": key.as_str(),
            "error": error,
        }),

        DeployEvent::SyncCompleted {
            uploaded,
            skipped,
            dry_run,
        } => serde_json::json!({
            "event": "sync_complete",
            "uploaded": uploaded,
            "skipped": skipped,
            "dry_run": dry_run,
        }),

        DeployEvent::InvalidationSplit {
            path_count,
            batch_count,
        } => serde_json::json!({
            "event": "invalidation_split",
            "paths": path_count,
            "batches": batch_count,
        }),

        DeployEvent::InvalidationCreated { id, path_count } => serde_json::json!({
            "event": "invalidation_created",
            "id": id.as_str(),
            "paths": path_count,
        }),

        DeployEvent::InvalidationPlanned { paths } => serde_json::json!({
            "event": "invalidation_planned",
            "paths": paths,
        }),

        DeployEvent::InvalidationNotNeeded => serde_json::json!({
            "event": "invalidation_not_needed",
        }),

        DeployEvent::WaitStarted { id } => serde_json::json!({
            "event": "wait_start",
            "id": id.as_str(),
        }),

        DeployEvent::WaitPolled { id, status } => serde_json::json!({
            "event": "wait_poll",
            "id": id.as_str(),
            "status": status.as_str(),
        }),

        DeployEvent::WaitFinished { id, outcome } => serde_json::json!({
            "event": "wait_complete",
            "id": id.as_str(),
            "outcome": outcome.label(),
            "message": outcome.to_string(),
        }),

        DeployEvent::Completed {
            uploaded,
            skipped,
            invalidation_ids,
            dry_run,
        } => serde_json::json!({
            "event": "complete",
            "status": "success",
            "uploaded": uploaded,
            "skipped": skipped,
            "invalidation_ids": invalidation_ids.iter().map(|id| id.as_str()).collect::<Vec<_>>(),
            "dry_run": dry_run,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
