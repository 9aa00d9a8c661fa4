//! User config directory resolution with test isolation support.
//!
//! On Windows and macOS, `dirs::config_dir()` uses system APIs rather than
//! environment variables, so tests cannot redirect it through `HOME`.
//! `DEPLOY_SITE_CONFIG_HOME` overrides it for every internal lookup.

use std::path::PathBuf;

/// Environment variable overriding the user config directory.
pub const CONFIG_HOME_VAR: &str = "DEPLOY_SITE_CONFIG_HOME";

/// Directory holding the user-level `config.toml`.
///
/// Returns `$DEPLOY_SITE_CONFIG_HOME` when set and non-empty, otherwise
/// `<config dir>/deploy-site`.
pub fn user_config_dir() -> Option<PathBuf> {
    user_config_dir_with(|key| std::env::var(key).ok())
}

fn user_config_dir_with(get_env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(dir) = get_env(CONFIG_HOME_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join("deploy-site"))
}
