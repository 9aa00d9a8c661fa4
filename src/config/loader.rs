//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};
use crate::infrastructure::fs::user_config_dir;

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "deploy-site.toml";
/// User config file name inside the user config directory
pub const USER_CONFIG_FILE: &str = "config.toml";

pub(crate) const BUCKET_VAR: &str = "DEPLOY_BUCKET";
pub(crate) const DISTRIBUTION_VAR: &str = "CF_DIST_ID";
const PROFILE_VAR: &str = "DEPLOY_AWS_PROFILE";
const REGION_VAR: &str = "DEPLOY_AWS_REGION";
const WAIT_TIMEOUT_VAR: &str = "DEPLOY_WAIT_TIMEOUT";
const COLOR_VAR: &str = "DEPLOY_SITE_COLOR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| {
        DeployError::Config(format!("could not read config {}: {}", path.display(), e))
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::Config(format!("invalid config {}: {}", path.display(), e)))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the explicit path, project config, user config, or defaults
pub fn load_layered(
    explicit: Option<&Path>,
    project_dir: &Path,
) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(DeployError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return load_with_warnings(path);
    }

    let project_config = project_dir.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        tracing::debug!(path = %project_config.display(), "using project config");
        return load_with_warnings(&project_config);
    }

    if let Some(dir) = user_config_dir() {
        let user_config = dir.join(USER_CONFIG_FILE);
        if user_config.is_file() {
            tracing::debug!(path = %user_config.display(), "using user config");
            return load_with_warnings(&user_config);
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides from the process environment
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply environment variable overrides read through `get_env`
///
/// Empty values are ignored. An unparseable `DEPLOY_WAIT_TIMEOUT` keeps the
/// configured timeout.
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    let get = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    if let Some(bucket) = get(BUCKET_VAR) {
        config.bucket = Some(bucket);
    }
    if let Some(dist_id) = get(DISTRIBUTION_VAR) {
        config.distribution_id = Some(dist_id);
    }
    if let Some(profile) = get(PROFILE_VAR) {
        config.profile = Some(profile);
    }
    if let Some(region) = get(REGION_VAR) {
        config.region = Some(region);
    }

    // DEPLOY_WAIT_TIMEOUT (seconds)
    if let Some(timeout) = get(WAIT_TIMEOUT_VAR) {
        match timeout.trim().parse::<u64>() {
            Ok(secs) => config.invalidation.wait_timeout_secs = secs,
            Err(_) => tracing::warn!(value = %timeout, "ignoring invalid {}", WAIT_TIMEOUT_VAR),
        }
    }

    // DEPLOY_SITE_COLOR
    if let Some(color) = get(COLOR_VAR) {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "bucket",
        "distribution_id",
        "profile",
        "region",
        "invalidation",
        "wait_timeout_secs",
        "poll_interval_secs",
        "max_batch_size",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
