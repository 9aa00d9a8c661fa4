//! Remote Store Port
//!
//! Abstracts the object store the site is uploaded to. The sync logic only
//! needs to read an object's change-detection token and to upload a file.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::{FingerprintToken, ObjectKey};

/// Error during object store operations
///
/// "Not found" is not an error: `get_token` reports it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum RemoteStoreError {
    /// Credentials missing or rejected
    #[error("access denied for '{key}': {message}")]
    AccessDenied { key: String, message: String },

    /// Transport or service failure
    #[error("request for '{key}' failed: {message}")]
    Request { key: String, message: String },

    /// The local file to upload could not be read
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Trait for object stores
///
/// Implementations:
/// - `S3Store`: Amazon S3 (or any S3-compatible endpoint)
/// - in-memory fakes in tests
pub trait RemoteStore {
    /// Get a display name for this store (e.g. `s3://bucket`)
    fn display_name(&self) -> String;

    /// Current token of the object under `key`, or `None` if it does not exist
    fn get_token(&self, key: &ObjectKey) -> Result<Option<FingerprintToken>, RemoteStoreError>;

    /// Upload the bytes of `local_path` under `key`, replacing any existing object
    fn put(&self, local_path: &Path, key: &ObjectKey) -> Result<(), RemoteStoreError>;
}

impl<T: RemoteStore + ?Sized> RemoteStore for &T {
    fn display_name(&self) -> String {
        (**self).display_name()
    }

    fn get_token(&self, key: &ObjectKey) -> Result<Option<FingerprintToken>, RemoteStoreError> {
        (**self).get_token(key)
    }

    fn put(&self, local_path: &Path, key: &ObjectKey) -> Result<(), RemoteStoreError> {
        (**self).put(local_path, key)
    }
}

impl<T: RemoteStore + ?Sized> RemoteStore for Box<T> {
    fn display_name(&self) -> String {
        (**self).display_name()
    }

    fn get_token(&self, key: &ObjectKey) -> Result<Option<FingerprintToken>, RemoteStoreError> {
        (**self).get_token(key)
    }

    fn put(&self, local_path: &Path, key: &ObjectKey) -> Result<(), RemoteStoreError> {
        (**self).put(local_path, key)
    }
}
