//! Use Case Factory
//!
//! Resolves settings and creates use cases with infrastructure dependencies
//! wired up. This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{CacheInvalidator, DeltaSyncer, DeployOptions, DeployUseCase};
use crate::config::{Config, ConfigWarning};
use crate::domain::ports::DeployEventSink;
use crate::error::DeployResult;
use crate::infrastructure::{AwsSession, CloudFrontApi, ConsoleEventSink, JsonEventSink, S3Store};
use crate::ui::UiContext;

use super::cli::Cli;

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<S3Store, CloudFrontApi>;

/// Load config files and environment, then apply CLI flags on top.
pub fn load_config(cli: &Cli, working_dir: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = Config::load_layered(cli.config.as_deref(), working_dir)?;
    Ok((apply_cli_overrides(config.with_env_overrides(), cli), warnings))
}

/// Settings for reporting a failed run: the resolved config when it still
/// loads, defaults when loading it is what failed.
pub fn config_for_error_report(cli: &Cli, working_dir: &Path) -> Config {
    load_config(cli, working_dir)
        .map(|(config, _)| config)
        .unwrap_or_default()
}

/// CLI flags win over every other source
pub fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(bucket) = &cli.bucket {
        config.bucket = Some(bucket.clone());
    }
    if let Some(dist_id) = &cli.dist_id {
        config.distribution_id = Some(dist_id.clone());
    }
    if let Some(profile) = &cli.profile {
        config.profile = Some(profile.clone());
    }
    if let Some(region) = &cli.region {
        config.region = Some(region.clone());
    }
    if let Some(timeout) = cli.timeout {
        config.invalidation.wait_timeout_secs = timeout;
    }
    config
}

/// Per-run options from the CLI and resolved config
pub fn deploy_options(cli: &Cli, config: &Config) -> DeployOptions {
    DeployOptions::new(&cli.folder)
        .with_dry_run(cli.dry_run)
        .with_wait(cli.wait)
        .with_wait_timeout(config.invalidation.wait_timeout())
}

/// Event sink matching the output mode
pub fn create_event_sink(ui: &UiContext) -> Arc<dyn DeployEventSink> {
    if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ui.color, ui.unicode, ui.verbose))
    }
}

/// Create a deploy use case against S3 and CloudFront
///
/// Fails with a config error if the bucket or distribution id is missing;
/// no AWS client is built in that case.
pub fn create_deploy_use_case(
    config: &Config,
    event_sink: Arc<dyn DeployEventSink>,
) -> DeployResult<ConcreteDeployUseCase> {
    let bucket = config.require_bucket()?;
    let distribution_id = config.require_distribution_id()?;

    let session = AwsSession::load(config.profile.as_deref(), config.region.as_deref())?;
    let syncer = DeltaSyncer::new(session.s3_store(bucket));
    let invalidator = CacheInvalidator::new(session.cloudfront(), distribution_id)
        .with_poll_interval(config.invalidation.poll_interval())
        .with_max_batch_size(config.invalidation.max_batch_size);

    Ok(DeployUseCase::new(syncer, invalidator).with_event_sink(event_sink))
}
