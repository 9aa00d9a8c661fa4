//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Delta-sync the source directory to the store
//! 2. If anything was uploaded, invalidate those paths on the CDN
//! 3. Optionally wait for every invalidation to finish
//!
//! A dry run stops after step 1 and reports the paths it would invalidate.
//! A wait that does not complete is reported, not raised.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::invalidate::CacheInvalidator;
use crate::application::sync::DeltaSyncer;
use crate::domain::ports::{CdnApi, DeployEvent, DeployEventSink, NoopEventSink, RemoteStore};
use crate::error::DeployResult;

use super::options::DeployOptions;
use super::result::{DeploySummary, InvalidationOutcome};

/// Deploy use case - orchestrates sync and invalidation
///
/// Parameterized by the store and CDN ports so the whole flow can run
/// against in-memory fakes.
pub struct DeployUseCase<RS, C>
where
    RS: RemoteStore,
    C: CdnApi,
{
    syncer: DeltaSyncer<RS>,
    invalidator: CacheInvalidator<C>,
    event_sink: Arc<dyn DeployEventSink>,
}

impl<RS, C> DeployUseCase<RS, C>
where
    RS: RemoteStore,
    C: CdnApi,
{
    pub fn new(syncer: DeltaSyncer<RS>, invalidator: CacheInvalidator<C>) -> Self {
        Self {
            syncer,
            invalidator,
            event_sink: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `event_sink`, including from the sync and
    /// invalidation steps.
    pub fn with_event_sink(self, event_sink: Arc<dyn DeployEventSink>) -> Self {
        Self {
            syncer: self.syncer.with_event_sink(event_sink.clone()),
            invalidator: self.invalidator.with_event_sink(event_sink.clone()),
            event_sink,
        }
    }

    /// Deploy `root_dir` with default options apart from the two flags
    pub fn deploy(
        &self,
        root_dir: impl Into<PathBuf>,
        dry_run: bool,
        wait_for_invalidation: bool,
    ) -> DeployResult<DeploySummary> {
        self.execute(
            &DeployOptions::new(root_dir)
                .with_dry_run(dry_run)
                .with_wait(wait_for_invalidation),
        )
    }

    /// Execute the deploy use case
    pub fn execute(&self, options: &DeployOptions) -> DeployResult<DeploySummary> {
        self.event_sink.on_event(DeployEvent::Started {
            source: options.source.clone(),
            destination: self.syncer.store().display_name(),
            distribution_id: self.invalidator.distribution_id().to_string(),
            dry_run: options.dry_run,
        });

        let sync = self.syncer.sync(&options.source, options.dry_run)?;
        tracing::info!(
            uploaded = sync.uploaded.len(),
            skipped = sync.skipped.len(),
            dry_run = sync.dry_run,
            "sync finished"
        );

        let invalidation = self.invalidate_changes(&sync.invalidation_paths(), options)?;

        let summary = DeploySummary { sync, invalidation };
        self.event_sink.on_event(DeployEvent::Completed {
            uploaded: summary.sync.uploaded.len(),
            skipped: summary.sync.skipped.len(),
            invalidation_ids: summary.invalidation_ids().to_vec(),
            dry_run: options.dry_run,
        });
        Ok(summary)
    }

    fn invalidate_changes(
        &self,
        paths: &[String],
        options: &DeployOptions,
    ) -> DeployResult<InvalidationOutcome> {
        if options.dry_run {
            self.event_sink.on_event(DeployEvent::InvalidationPlanned {
                paths: paths.to_vec(),
            });
            return Ok(InvalidationOutcome::DryRun {
                paths: paths.to_vec(),
            });
        }

        if paths.is_empty() {
            self.event_sink.on_event(DeployEvent::InvalidationNotNeeded);
            return Ok(InvalidationOutcome::NotNeeded);
        }

        let ids = self.invalidator.invalidate(paths)?;
        let waited = if options.wait {
            self.invalidator.wait_all(&ids, options.wait_timeout)
        } else {
            Vec::new()
        };
        Ok(InvalidationOutcome::Submitted { ids, waited })
    }
}
