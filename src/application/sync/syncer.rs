//! Delta Syncer
//!
//! One pass, one file at a time, in enumeration order:
//! 1. Ask the store for the object's current token
//! 2. Skip the file if the local fingerprint matches
//! 3. Otherwise upload it (or just record it, in a dry run)
//!
//! The first failure aborts the pass. Files already uploaded stay uploaded;
//! the store offers no multi-object transaction to roll them back.

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::{LocalFile, RemoteObjectRef, SyncResult};
use crate::domain::ports::{DeployEvent, DeployEventSink, NoopEventSink, RemoteStore};
use crate::domain::value_objects::ObjectKey;
use crate::error::{DeployError, DeployResult};
use crate::infrastructure::fs::{list_files, ContentFingerprinter};

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileAction {
    Upload,
    Skip,
}

/// Delta syncer - uploads only files whose content changed
///
/// Parameterized by the store port so tests can substitute an in-memory fake.
pub struct DeltaSyncer<RS>
where
    RS: RemoteStore,
{
    store: RS,
    fingerprinter: ContentFingerprinter,
    event_sink: Arc<dyn DeployEventSink>,
}

impl<RS> DeltaSyncer<RS>
where
    RS: RemoteStore,
{
    pub fn new(store: RS) -> Self {
        Self {
            store,
            fingerprinter: ContentFingerprinter::new(),
            event_sink: Arc::new(NoopEventSink),
        }
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn DeployEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn store(&self) -> &RS {
        &self.store
    }

    /// Sync every regular file under `root` to the store.
    ///
    /// Fails with `NotFound` if `root` is not an existing directory, and with
    /// `InvalidData` before any upload if a file name is not valid UTF-8. Any
    /// store or read failure aborts the remaining files and propagates.
    pub fn sync(&self, root: &Path, dry_run: bool) -> DeployResult<SyncResult> {
        if !root.is_dir() {
            return Err(DeployError::NotFound {
                path: root.to_path_buf(),
            });
        }
        let root = std::fs::canonicalize(root)?;

        let files = list_files(&root)?;
        let keys = files
            .iter()
            .map(LocalFile::key)
            .collect::<std::io::Result<Vec<_>>>()?;
        tracing::debug!(root = %root.display(), files = files.len(), dry_run, "starting sync pass");
        self.event_sink
            .on_event(DeployEvent::FilesDiscovered { count: files.len() });

        let mut result = SyncResult::new(dry_run);
        for (index, (file, key)) in files.iter().zip(keys).enumerate() {
            match self.sync_file(index, file, &key, dry_run) {
                Ok(FileAction::Upload) => result.uploaded.push(key),
                Ok(FileAction::Skip) => result.skipped.push(key),
                Err(err) => {
                    self.event_sink.on_event(DeployEvent::FileError {
                        index,
                        key,
                        error: err.to_string(),
                    });
                    return Err(err);
                }
            }
        }

        self.event_sink.on_event(DeployEvent::SyncCompleted {
            uploaded: result.uploaded.len(),
            skipped: result.skipped.len(),
            dry_run,
        });
        Ok(result)
    }

    fn sync_file(
        &self,
        index: usize,
        file: &LocalFile,
        key: &ObjectKey,
        dry_run: bool,
    ) -> DeployResult<FileAction> {
        let detailed = self.event_sink.wants_detailed_events();
        if detailed {
            self.event_sink.on_event(DeployEvent::FileStarted {
                index,
                key: key.clone(),
            });
        }

        let remote = RemoteObjectRef::new(key.clone(), self.store.get_token(key)?);
        let unchanged = match &remote.token {
            Some(token) if token.is_multipart() => {
                tracing::debug!(key = %key, etag = %token, "multipart ETag never matches a local digest");
                false
            }
            Some(token) => self.fingerprinter.same_content(file.absolute(), token)?,
            None => false,
        };

        if unchanged {
            tracing::debug!(key = %key, "unchanged, skipping");
            if detailed {
                self.event_sink.on_event(DeployEvent::FileSkipped {
                    index,
                    key: key.clone(),
                    dry_run,
                });
            }
            return Ok(FileAction::Skip);
        }

        if !dry_run {
            self.store.put(file.absolute(), key)?;
        }
        tracing::info!(key = %key, exists = remote.exists(), dry_run, "uploaded");
        if detailed {
            self.event_sink.on_event(DeployEvent::FileUploaded {
                index,
                key: key.clone(),
                dry_run,
            });
        }
        Ok(FileAction::Upload)
    }
}
