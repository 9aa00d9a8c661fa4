//! Domain Layer
//!
//! Value types and port definitions for the deploy pipeline, free of any
//! AWS or terminal dependency.
//!
//! ## Structure
//!
//! - `entities/` - Things a sync pass produces (LocalFile, SyncResult, InvalidationBatch)
//! - `value_objects/` - Immutable value types (ObjectKey, FingerprintToken, InvalidationStatus)
//! - `ports/` - Interfaces to the object store, the CDN and the reporter

pub mod entities;
pub mod ports;
pub mod value_objects;
