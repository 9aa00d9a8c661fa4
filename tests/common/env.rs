//! Test environment builder for isolated deploy-site runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Variables that would leak settings from the developer's shell
const SCRUBBED_VARS: &[&str] = &[
    "DEPLOY_BUCKET",
    "CF_DIST_ID",
    "DEPLOY_AWS_PROFILE",
    "DEPLOY_AWS_REGION",
    "DEPLOY_WAIT_TIMEOUT",
    "DEPLOY_SITE_COLOR",
    "RUST_LOG",
];

/// Result of running the deploy-site binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working directory and user config directory
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("create project dir"),
            config_home: tempfile::tempdir().expect("create config dir"),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root, creating parents
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        write_file(self.project_root.path(), relative, content)
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, content: &str) {
        write_file(self.config_home.path(), "config.toml", content);
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_deploy-site"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("DEPLOY_SITE_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute deploy-site");
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, content).expect("write file");
    path
}
