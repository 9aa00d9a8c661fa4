//! Configuration module for deploy-site
//!
//! Settings resolve in this order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`DEPLOY_BUCKET`, `CF_DIST_ID`, `DEPLOY_*`)
//! 3. Project config (`--config <PATH>`, else `./deploy-site.toml`)
//! 4. User config (`<config dir>/deploy-site/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{ColorMode, Config, InvalidationConfig, OutputConfig};
