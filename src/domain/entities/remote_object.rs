//! Remote Object Reference

use crate::domain::value_objects::{FingerprintToken, ObjectKey};

/// What the object store currently holds under a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteObjectRef {
    pub key: ObjectKey,
    /// `None` when no object exists under the key
    pub token: Option<FingerprintToken>,
}

impl RemoteObjectRef {
    pub fn new(key: ObjectKey, token: Option<FingerprintToken>) -> Self {
        Self { key, token }
    }

    pub fn exists(&self) -> bool {
        self.token.is_some()
    }
}
