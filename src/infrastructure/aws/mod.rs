//! AWS Adapters
//!
//! S3 and CloudFront implementations of the domain ports. The SDK is async;
//! the ports are not, so a session owns a current-thread tokio runtime and
//! every adapter call blocks on it.

mod cloudfront;
mod s3;

use std::io;
use std::sync::Arc;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tokio::runtime::Runtime;

pub use cloudfront::CloudFrontApi;
pub use s3::S3Store;

/// Shared AWS configuration plus the runtime the adapters block on
pub struct AwsSession {
    runtime: Arc<Runtime>,
    sdk_config: SdkConfig,
}

impl AwsSession {
    /// Resolve credentials and region from the standard AWS chain.
    ///
    /// `profile` selects a named profile from the shared config files,
    /// `region` overrides whatever the chain resolves.
    pub fn load(profile: Option<&str>, region: Option<&str>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let sdk_config = runtime.block_on(loader.load());

        tracing::debug!(
            profile = profile.unwrap_or("default"),
            region = ?sdk_config.region(),
            "loaded AWS configuration"
        );

        Ok(Self {
            runtime: Arc::new(runtime),
            sdk_config,
        })
    }

    /// Object store adapter for `bucket`
    pub fn s3_store(&self, bucket: impl Into<String>) -> S3Store {
        S3Store::new(
            aws_sdk_s3::Client::new(&self.sdk_config),
            bucket,
            self.runtime.clone(),
        )
    }

    /// CDN adapter
    pub fn cloudfront(&self) -> CloudFrontApi {
        CloudFrontApi::new(
            aws_sdk_cloudfront::Client::new(&self.sdk_config),
            self.runtime.clone(),
        )
    }
}

/// Error codes AWS services use for missing, invalid or expired credentials
fn is_auth_failure(code: Option<&str>) -> bool {
    matches!(
        code,
        Some(
            "AccessDenied"
                | "Forbidden"
                | "InvalidAccessKeyId"
                | "SignatureDoesNotMatch"
                | "ExpiredToken"
                | "InvalidClientTokenId"
                | "UnrecognizedClientException"
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_codes_are_auth_failures() {
        assert!(is_auth_failure(Some("AccessDenied")));
        assert!(is_auth_failure(Some("ExpiredToken")));
    }

    #[test]
    fn other_codes_are_not_auth_failures() {
        assert!(!is_auth_failure(Some("SlowDown")));
        assert!(!is_auth_failure(None));
    }
}
