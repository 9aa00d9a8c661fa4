//! Application Layer
//!
//! Use cases that orchestrate the deploy flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Uses local file system helpers from Infrastructure
//! - Never prints; progress goes through `DeployEventSink`
//!
//! ## Use Cases
//!
//! - `DeltaSyncer` - Upload files whose content differs from the bucket
//! - `CacheInvalidator` - Submit chunked CDN invalidations and wait on them
//! - `DeployUseCase` - Sync, then invalidate what changed

pub mod deploy;
pub mod invalidate;
pub mod sync;

pub use deploy::{DeployOptions, DeploySummary, DeployUseCase, InvalidationOutcome};
pub use invalidate::{CacheInvalidator, DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT};
pub use sync::DeltaSyncer;
