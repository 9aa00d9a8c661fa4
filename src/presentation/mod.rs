//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Error and warning output
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Warning and error rendering

pub mod cli;
pub mod factory;
pub mod output;

use std::path::Path;

use anyhow::Context;

use crate::error::DeployError;
use crate::ui::UiContext;

pub use cli::{Cli, ColorWhen};
pub use factory::create_deploy_use_case;

/// Run one deploy for the parsed command line.
///
/// Settings and the source directory are checked before any AWS client is
/// built. Errors wrap a `DeployError` whenever one caused them, so the
/// caller can map them to an exit code.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().context("could not resolve working directory")?;
    let (config, warnings) = factory::load_config(cli, &working_dir)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    output::print_config_warnings(&warnings, &ui);

    config.validate()?;
    ensure_directory(&cli.folder)?;

    let event_sink = factory::create_event_sink(&ui);
    let use_case = factory::create_deploy_use_case(&config, event_sink)?;
    let options = factory::deploy_options(cli, &config);

    let summary = use_case.execute(&options)?;
    tracing::info!(
        changed = summary.has_changes(),
        uploaded = summary.sync.uploaded.len(),
        skipped = summary.sync.skipped.len(),
        invalidations = summary.invalidation_ids().len(),
        unfinished_waits = summary.unfinished_waits().len(),
        "deploy finished"
    );
    Ok(())
}

fn ensure_directory(path: &Path) -> Result<(), DeployError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(DeployError::NotFound {
            path: path.to_path_buf(),
        })
    }
}
