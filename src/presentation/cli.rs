//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! `--bucket` and `--dist-id` fall back to `DEPLOY_BUCKET` and `CF_DIST_ID`;
//! remaining settings fall back to the config files.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Deploy a static site to S3 and invalidate the CloudFront cache for what changed
#[derive(Parser, Debug)]
#[command(name = "deploy-site")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the built static site
    pub folder: PathBuf,

    /// S3 bucket name
    #[arg(long, env = "DEPLOY_BUCKET")]
    pub bucket: Option<String>,

    /// CloudFront distribution ID
    #[arg(long = "dist-id", env = "CF_DIST_ID")]
    pub dist_id: Option<String>,

    /// AWS profile to use
    #[arg(long)]
    pub profile: Option<String>,

    /// AWS region override
    #[arg(long)]
    pub region: Option<String>,

    /// Show what would be uploaded without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Wait for the CloudFront invalidation to complete
    #[arg(long)]
    pub wait: bool,

    /// Seconds to wait for each invalidation (with --wait)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Config file (defaults to ./deploy-site.toml, then the user config)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default tracing filter for the verbosity level
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
