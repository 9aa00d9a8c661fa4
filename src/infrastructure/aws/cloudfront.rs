//! CloudFront CDN adapter

use std::sync::Arc;

use aws_sdk_cloudfront::error::DisplayErrorContext;
use aws_sdk_cloudfront::types::{InvalidationBatch as ApiInvalidationBatch, Paths};
use aws_sdk_cloudfront::Client as CloudFrontClient;
use tokio::runtime::Runtime;

use crate::domain::entities::InvalidationBatch;
use crate::domain::ports::{CdnApi, InvalidationError};
use crate::domain::value_objects::{InvalidationId, InvalidationStatus};

/// `CdnApi` backed by Amazon CloudFront
pub struct CloudFrontApi {
    client: CloudFrontClient,
    runtime: Arc<Runtime>,
}

impl CloudFrontApi {
    pub fn new(client: CloudFrontClient, runtime: Arc<Runtime>) -> Self {
        Self { client, runtime }
    }
}

impl CdnApi for CloudFrontApi {
    fn create_invalidation(
        &self,
        distribution_id: &str,
        batch: &InvalidationBatch,
    ) -> Result<InvalidationId, InvalidationError> {
        let quantity = i32::try_from(batch.len()).map_err(|_| InvalidationError::Create {
            message: format!("{} paths exceed the request limit", batch.len()),
        })?;

        let paths = Paths::builder()
            .quantity(quantity)
            .set_items(Some(batch.paths().to_vec()))
            .build()
            .map_err(|e| InvalidationError::Create {
                message: e.to_string(),
            })?;

        let request = ApiInvalidationBatch::builder()
            .paths(paths)
            .caller_reference(batch.caller_reference())
            .build()
            .map_err(|e| InvalidationError::Create {
                message: e.to_string(),
            })?;

        let output = self
            .runtime
            .block_on(
                self.client
                    .create_invalidation()
                    .distribution_id(distribution_id)
                    .invalidation_batch(request)
                    .send(),
            )
            .map_err(|err| InvalidationError::Create {
                message: DisplayErrorContext(&err).to_string(),
            })?;

        let id = output
            .invalidation()
            .map(|inv| inv.id().to_string())
            .ok_or_else(|| InvalidationError::Create {
                message: "response did not include an invalidation".to_string(),
            })?;

        tracing::info!(
            distribution_id,
            invalidation_id = %id,
            paths = batch.len(),
            caller_reference = batch.caller_reference(),
            "created invalidation"
        );
        Ok(InvalidationId::new(id))
    }

    fn get_invalidation_status(
        &self,
        distribution_id: &str,
        id: &InvalidationId,
    ) -> Result<InvalidationStatus, InvalidationError> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .get_invalidation()
                    .distribution_id(distribution_id)
                    .id(id.as_str())
                    .send(),
            )
            .map_err(|err| InvalidationError::Status {
                id: id.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        let status = output
            .invalidation()
            .map(|inv| inv.status())
            .ok_or_else(|| InvalidationError::Status {
                id: id.to_string(),
                message: "response did not include an invalidation".to_string(),
            })?;

        tracing::debug!(invalidation_id = %id, status, "polled invalidation");
        Ok(InvalidationStatus::from_api(status))
    }
}
