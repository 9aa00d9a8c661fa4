//! deploy-site CLI
//!
//! Usage: deploy-site [OPTIONS] <FOLDER>
//!
//! Uploads changed files to S3 and invalidates them on CloudFront.
//! Exit codes: 0 success, 1 missing settings or directory, 2 anything else.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use deploy_site::error::EXIT_SUCCESS;
use deploy_site::presentation::{self, factory, output, Cli};
use deploy_site::ui::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    let code = match presentation::run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            let config = std::env::current_dir()
                .map(|dir| factory::config_for_error_report(&cli, &dir))
                .unwrap_or_default();
            let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
            output::print_error(&err, &ui);
            output::exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

// Logs go to stderr; stdout carries progress or NDJSON events.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}
