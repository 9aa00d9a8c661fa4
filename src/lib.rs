//! deploy-site - static site deployer
//!
//! Uploads a local directory to an S3 bucket, skipping files whose content
//! already matches the stored object, then invalidates the CloudFront cache
//! for exactly the paths that changed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{
    CacheInvalidator, DeltaSyncer, DeployOptions, DeploySummary, DeployUseCase,
    InvalidationOutcome,
};
pub use config::Config;
pub use domain::entities::{InvalidationBatch, SyncResult};
pub use domain::ports::{CdnApi, DeployEvent, DeployEventSink, RemoteStore};
pub use domain::value_objects::{FingerprintToken, InvalidationId, ObjectKey, WaitOutcome};
pub use error::{DeployError, DeployResult};
