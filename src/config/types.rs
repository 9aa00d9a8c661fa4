//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::entities::MAX_BATCH_SIZE;
use crate::error::{DeployError, DeployResult};

use super::loader::{self, ConfigWarning};

/// Invalidation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidationConfig {
    /// Per-invalidation limit for `--wait`
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Paths per request; capped at the CDN limit
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl Default for InvalidationConfig {
    fn default() -> Self {
        Self {
            wait_timeout_secs: default_wait_timeout_secs(),
            poll_interval_secs: default_poll_interval_secs(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

impl InvalidationConfig {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

fn default_wait_timeout_secs() -> u64 {
    300
}

fn default_poll_interval_secs() -> u64 {
    10
}

fn default_max_batch_size() -> usize {
    MAX_BATCH_SIZE
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Destination S3 bucket
    #[serde(default)]
    pub bucket: Option<String>,

    /// CloudFront distribution to invalidate
    #[serde(default)]
    pub distribution_id: Option<String>,

    /// Named AWS profile; the default credential chain when unset
    #[serde(default)]
    pub profile: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub invalidation: InvalidationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeployResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, the project config, the user config or defaults
    ///
    /// An explicit path that does not exist is an error; missing implicit
    /// files are not.
    pub fn load_layered(
        explicit: Option<&Path>,
        project_dir: &Path,
    ) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(explicit, project_dir)
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Apply environment overrides read through `get_env`
    pub fn with_env_overrides_from(self, get_env: impl Fn(&str) -> Option<String>) -> Self {
        loader::with_env_overrides_from(self, get_env)
    }

    pub fn require_bucket(&self) -> DeployResult<&str> {
        non_empty(self.bucket.as_deref()).ok_or_else(|| {
            DeployError::missing_setting("S3 bucket name", "--bucket", loader::BUCKET_VAR)
        })
    }

    pub fn require_distribution_id(&self) -> DeployResult<&str> {
        non_empty(self.distribution_id.as_deref()).ok_or_else(|| {
            DeployError::missing_setting(
                "CloudFront distribution ID",
                "--dist-id",
                loader::DISTRIBUTION_VAR,
            )
        })
    }

    /// Check that both required settings are present, bucket first.
    pub fn validate(&self) -> DeployResult<()> {
        self.require_bucket()?;
        self.require_distribution_id()?;
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
