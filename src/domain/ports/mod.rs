//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod cdn;
pub mod deploy_events;
pub mod remote_store;

pub use cdn::{CdnApi, InvalidationError};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use remote_store::{RemoteStore, RemoteStoreError};
