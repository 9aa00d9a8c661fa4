//! Error types for deploy-site
//!
//! Library errors use `thiserror`; only the binary reaches for `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{InvalidationError, RemoteStoreError};

/// Result type alias for deploy-site operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Process exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code for missing configuration or a missing source directory
pub const EXIT_USAGE: i32 = 1;
/// Process exit code for remote failures and anything unexpected
pub const EXIT_FAILURE: i32 = 2;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Source directory missing or not a directory
    #[error("directory not found: {path}")]
    NotFound { path: PathBuf },

    /// Missing or invalid configuration (bucket, distribution id, config file)
    #[error("{0}")]
    Config(String),

    /// Object store failure during head or put
    #[error(transparent)]
    RemoteStore(#[from] RemoteStoreError),

    /// CDN failure while creating an invalidation
    #[error(transparent)]
    Invalidation(#[from] InvalidationError),

    /// Local I/O failure (e.g. reading a file to fingerprint it)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::Config(_) => EXIT_USAGE,
            Self::RemoteStore(_) | Self::Invalidation(_) | Self::Io(_) => EXIT_FAILURE,
        }
    }

    pub fn missing_setting(what: &str, flag: &str, env_var: &str) -> Self {
        Self::Config(format!(
            "{what} required. Use {flag} or set the {env_var} environment variable."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = DeployError::NotFound {
            path: PathBuf::from("public"),
        };
        assert_eq!(err.to_string(), "directory not found: public");
    }

    #[test]
    fn test_missing_setting_message() {
        let err = DeployError::missing_setting("S3 bucket name", "--bucket", "DEPLOY_BUCKET");
        assert_eq!(
            err.to_string(),
            "S3 bucket name required. Use --bucket or set the DEPLOY_BUCKET environment variable."
        );
    }

    #[test]
    fn test_usage_errors_exit_with_one() {
        assert_eq!(
            DeployError::NotFound {
                path: PathBuf::from("x")
            }
            .exit_code(),
            EXIT_USAGE
        );
        assert_eq!(DeployError::Config("nope".into()).exit_code(), EXIT_USAGE);
    }

    #[test]
    fn test_remote_errors_exit_with_two() {
        let err: DeployError = RemoteStoreError::Request {
            key: "index.html".into(),
            message: "connection reset".into(),
        }
        .into();
        assert_eq!(err.exit_code(), EXIT_FAILURE);

        let err: DeployError = InvalidationError::Create {
            message: "throttled".into(),
        }
        .into();
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
}
