//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `aws/` - S3 object store and CloudFront invalidation clients
//! - `events/` - Event sinks (console, NDJSON)
//! - `fs/` - Local enumeration, fingerprinting, config directory

pub mod aws;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use aws::{AwsSession, CloudFrontApi, S3Store};
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{list_files, ContentFingerprinter};
