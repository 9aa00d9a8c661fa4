//! S3 object store adapter

use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use tokio::runtime::Runtime;

use crate::domain::ports::{RemoteStore, RemoteStoreError};
use crate::domain::value_objects::{FingerprintToken, ObjectKey};

/// `RemoteStore` backed by an S3 bucket
pub struct S3Store {
    client: S3Client,
    bucket: String,
    runtime: Arc<Runtime>,
}

impl S3Store {
    pub fn new(client: S3Client, bucket: impl Into<String>, runtime: Arc<Runtime>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            runtime,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl RemoteStore for S3Store {
    fn display_name(&self) -> String {
        format!("s3://{}", self.bucket)
    }

    fn get_token(&self, key: &ObjectKey) -> Result<Option<FingerprintToken>, RemoteStoreError> {
        let response = self.runtime.block_on(
            self.client
                .head_object()
                .bucket(&self.bucket)
                .key(key.as_str())
                .send(),
        );

        match response {
            Ok(output) => Ok(output.e_tag().map(FingerprintToken::new)),
            Err(SdkError::ServiceError(context)) if context.err().is_not_found() => Ok(None),
            Err(err) => Err(request_error(key, err)),
        }
    }

    fn put(&self, local_path: &Path, key: &ObjectKey) -> Result<(), RemoteStoreError> {
        let body = self
            .runtime
            .block_on(ByteStream::from_path(local_path))
            .map_err(|e| RemoteStoreError::Read {
                path: local_path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        let content_type = mime_guess::from_path(local_path)
            .first_or_octet_stream()
            .to_string();

        self.runtime
            .block_on(
                self.client
                    .put_object()
                    .bucket(&self.bucket)
                    .key(key.as_str())
                    .content_type(&content_type)
                    .body(body)
                    .send(),
            )
            .map_err(|err| request_error(key, err))?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            content_type = %content_type,
            "uploaded object"
        );
        Ok(())
    }
}

fn request_error<E, R>(key: &ObjectKey, err: SdkError<E, R>) -> RemoteStoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: Debug,
{
    let message = DisplayErrorContext(&err).to_string();
    if super::is_auth_failure(err.code()) {
        RemoteStoreError::AccessDenied {
            key: key.to_string(),
            message,
        }
    } else {
        RemoteStoreError::Request {
            key: key.to_string(),
            message,
        }
    }
}
