//! CDN Port
//!
//! The two calls the invalidation logic makes against a CDN's cache-purge API.

use thiserror::Error;

use crate::domain::entities::InvalidationBatch;
use crate::domain::value_objects::{InvalidationId, InvalidationStatus};

/// Error from the CDN API
#[derive(Debug, Error)]
pub enum InvalidationError {
    /// Submitting an invalidation failed
    #[error("error creating invalidation: {message}")]
    Create { message: String },

    /// Reading an invalidation's status failed
    #[error("error checking invalidation {id}: {message}")]
    Status { id: String, message: String },
}

/// Trait for CDN cache-purge APIs
///
/// Implementations:
/// - `CloudFrontApi`: Amazon CloudFront
/// - recording fakes in tests
pub trait CdnApi {
    /// Submit one invalidation batch, returning the id the CDN assigned
    fn create_invalidation(
        &self,
        distribution_id: &str,
        batch: &InvalidationBatch,
    ) -> Result<InvalidationId, InvalidationError>;

    /// Current status of a previously submitted invalidation
    fn get_invalidation_status(
        &self,
        distribution_id: &str,
        id: &InvalidationId,
    ) -> Result<InvalidationStatus, InvalidationError>;
}

impl<T: CdnApi + ?Sized> CdnApi for &T {
    fn create_invalidation(
        &self,
        distribution_id: &str,
        batch: &InvalidationBatch,
    ) -> Result<InvalidationId, InvalidationError> {
        (**self).create_invalidation(distribution_id, batch)
    }

    fn get_invalidation_status(
        &self,
        distribution_id: &str,
        id: &InvalidationId,
    ) -> Result<InvalidationStatus, InvalidationError> {
        (**self).get_invalidation_status(distribution_id, id)
    }
}

impl<T: CdnApi + ?Sized> CdnApi for Box<T> {
    fn create_invalidation(
        &self,
        distribution_id: &str,
        batch: &InvalidationBatch,
    ) -> Result<InvalidationId, InvalidationError> {
        (**self).create_invalidation(distribution_id, batch)
    }

    fn get_invalidation_status(
        &self,
        distribution_id: &str,
        id: &InvalidationId,
    ) -> Result<InvalidationStatus, InvalidationError> {
        (**self).get_invalidation_status(distribution_id, id)
    }
}
