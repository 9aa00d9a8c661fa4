//! Value Objects
//!
//! Immutable types compared by value.

mod fingerprint;
mod invalidation;
mod object_key;

pub use fingerprint::FingerprintToken;
pub use invalidation::{InvalidationId, InvalidationStatus, WaitOutcome};
pub use object_key::{normalize_invalidation_path, ObjectKey};
