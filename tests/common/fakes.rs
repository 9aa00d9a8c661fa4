//! In-memory implementations of the store and CDN ports.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use deploy_site::domain::ports::{InvalidationError, RemoteStoreError};
use deploy_site::domain::value_objects::InvalidationStatus;
use deploy_site::{
    CdnApi, FingerprintToken, InvalidationBatch, InvalidationId, ObjectKey, RemoteStore,
};

/// Bucket contents keyed by object key
#[derive(Default)]
pub struct MemoryStore {
    pub objects: RefCell<BTreeMap<String, Vec<u8>>>,
    pub put_count: Cell<usize>,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.borrow().get(key).cloned()
    }
}

impl RemoteStore for MemoryStore {
    fn display_name(&self) -> String {
        "s3://memory".to_string()
    }

    fn get_token(&self, key: &ObjectKey) -> Result<Option<FingerprintToken>, RemoteStoreError> {
        Ok(self
            .objects
            .borrow()
            .get(key.as_str())
            .map(|bytes| FingerprintToken::from_content(bytes)))
    }

    fn put(&self, local_path: &Path, key: &ObjectKey) -> Result<(), RemoteStoreError> {
        let bytes = fs::read(local_path).map_err(|source| RemoteStoreError::Read {
            path: local_path.to_path_buf(),
            source,
        })?;
        self.objects.borrow_mut().insert(key.to_string(), bytes);
        self.put_count.set(self.put_count.get() + 1);
        Ok(())
    }
}

/// CDN that records every batch and reports a fixed status
pub struct MemoryCdn {
    pub batches: RefCell<Vec<InvalidationBatch>>,
    pub status: InvalidationStatus,
}

#[allow(dead_code)]
impl MemoryCdn {
    pub fn new(status: InvalidationStatus) -> Self {
        Self {
            batches: RefCell::new(Vec::new()),
            status,
        }
    }

    /// Every path submitted so far, in submission order
    pub fn invalidated_paths(&self) -> Vec<String> {
        self.batches
            .borrow()
            .iter()
            .flat_map(|batch| batch.paths().to_vec())
            .collect()
    }
}

impl CdnApi for MemoryCdn {
    fn create_invalidation(
        &self,
        _distribution_id: &str,
        batch: &InvalidationBatch,
    ) -> Result<InvalidationId, InvalidationError> {
        let mut batches = self.batches.borrow_mut();
        batches.push(batch.clone());
        Ok(InvalidationId::new(format!("INV{}", batches.len())))
    }

    fn get_invalidation_status(
        &self,
        _distribution_id: &str,
        _id: &InvalidationId,
    ) -> Result<InvalidationStatus, InvalidationError> {
        Ok(self.status.clone())
    }
}
