//! Cache Invalidator
//!
//! Creation is all-or-error: the first rejected batch aborts the rest and
//! surfaces as `DeployError::Invalidation`. Waiting never errors; every way a
//! wait can end is a `WaitOutcome`.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::entities::{InvalidationBatch, MAX_BATCH_SIZE};
use crate::domain::ports::{CdnApi, DeployEvent, DeployEventSink, NoopEventSink};
use crate::domain::value_objects::{InvalidationId, InvalidationStatus, WaitOutcome};
use crate::error::DeployResult;

/// Time between status checks while waiting
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// How long to wait for an invalidation before giving up
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(300);

/// Submits and tracks invalidations for one distribution
pub struct CacheInvalidator<C>
where
    C: CdnApi,
{
    api: C,
    distribution_id: String,
    max_batch_size: usize,
    poll_interval: Duration,
    event_sink: Arc<dyn DeployEventSink>,
}

impl<C> CacheInvalidator<C>
where
    C: CdnApi,
{
    pub fn new(api: C, distribution_id: impl Into<String>) -> Self {
        Self {
            api,
            distribution_id: distribution_id.into(),
            max_batch_size: MAX_BATCH_SIZE,
            poll_interval: DEFAULT_POLL_INTERVAL,
            event_sink: Arc::new(NoopEventSink),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Cap the paths per request. Values above the CDN limit are clamped to it.
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size.clamp(1, MAX_BATCH_SIZE);
        self
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn DeployEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn distribution_id(&self) -> &str {
        &self.distribution_id
    }

    /// Invalidate `paths`, one request per batch.
    ///
    /// Returns the ids in submission order. An empty path list makes no
    /// request and returns no ids.
    pub fn invalidate<I, S>(&self, paths: I) -> DeployResult<Vec<InvalidationId>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batches = InvalidationBatch::chunked(paths, self.max_batch_size);
        if batches.is_empty() {
            return Ok(Vec::new());
        }

        if batches.len() > 1 {
            let path_count: usize = batches.iter().map(InvalidationBatch::len).sum();
            tracing::warn!(
                paths = path_count,
                batches = batches.len(),
                "too many paths for one invalidation, splitting"
            );
            self.event_sink.on_event(DeployEvent::InvalidationSplit {
                path_count,
                batch_count: batches.len(),
            });
        }

        let mut ids = Vec::with_capacity(batches.len());
        for (number, batch) in batches.iter().enumerate() {
            let id = self
                .api
                .create_invalidation(&self.distribution_id, batch)?;
            tracing::info!(
                id = %id,
                batch = number + 1,
                paths = batch.len(),
                caller_reference = batch.caller_reference(),
                "invalidation created"
            );
            self.event_sink.on_event(DeployEvent::InvalidationCreated {
                id: id.clone(),
                path_count: batch.len(),
            });
            ids.push(id);
        }
        Ok(ids)
    }

    /// Wait for `id` to complete. `true` only if the CDN reported `Completed`.
    pub fn wait(&self, id: &InvalidationId, timeout: Duration) -> bool {
        self.wait_for(id, timeout).is_completed()
    }

    /// Poll `id` until it reaches a terminal status, a check fails, or
    /// `timeout` elapses.
    ///
    /// Sleeps never run past the deadline. A zero timeout gives up before
    /// the first poll.
    pub fn wait_for(&self, id: &InvalidationId, timeout: Duration) -> WaitOutcome {
        self.event_sink
            .on_event(DeployEvent::WaitStarted { id: id.clone() });

        let outcome = self.poll_until(id, Instant::now().checked_add(timeout));

        match &outcome {
            WaitOutcome::Completed => tracing::info!(id = %id, "invalidation completed"),
            other => tracing::warn!(id = %id, outcome = %other, "invalidation did not complete"),
        }
        self.event_sink.on_event(DeployEvent::WaitFinished {
            id: id.clone(),
            outcome: outcome.clone(),
        });
        outcome
    }

    /// Wait on each id in turn, each with the full `timeout`.
    pub fn wait_all(
        &self,
        ids: &[InvalidationId],
        timeout: Duration,
    ) -> Vec<(InvalidationId, WaitOutcome)> {
        ids.iter()
            .map(|id| (id.clone(), self.wait_for(id, timeout)))
            .collect()
    }

    // `None` deadline: the timeout overflowed `Instant`, wait indefinitely.
    fn poll_until(&self, id: &InvalidationId, deadline: Option<Instant>) -> WaitOutcome {
        loop {
            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => self.poll_interval,
            };
            if remaining.is_zero() {
                return WaitOutcome::TimedOut;
            }

            let status = match self.api.get_invalidation_status(&self.distribution_id, id) {
                Ok(status) => status,
                Err(err) => return WaitOutcome::CheckFailed(err.to_string()),
            };
            tracing::debug!(id = %id, status = %status, "polled invalidation");
            match status {
                InvalidationStatus::Completed => return WaitOutcome::Completed,
                InvalidationStatus::Failed(_) => return WaitOutcome::Failed(status),
                InvalidationStatus::Pending | InvalidationStatus::InProgress => {
                    if self.event_sink.wants_detailed_events() {
                        self.event_sink.on_event(DeployEvent::WaitPolled {
                            id: id.clone(),
                            status,
                        });
                    }
                }
            }

            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => self.poll_interval,
            };
            if remaining.is_zero() {
                return WaitOutcome::TimedOut;
            }
            thread::sleep(self.poll_interval.min(remaining));
        }
    }
}
