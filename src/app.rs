//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging on stderr
//! - runs the sync pipeline
//! - prints the Markdown summary on stdout

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::domain::SyncConfig;

pub mod pipeline;

/// Entry point for the `fontsync` binary.
///
/// Prints the summary whether or not the run succeeded and returns the
/// process exit code.
pub fn run() -> u8 {
    // Before parsing, so `.env` values feed clap's `env` fallbacks.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let script_name = std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "fontsync".to_string());
    let config = sync_config_from_args(cli, script_name);

    let outcome = pipeline::execute(&config);
    for line in &outcome.lines {
        println!("{line}");
    }

    outcome.exit_code
}

pub fn sync_config_from_args(cli: Cli, script_name: String) -> SyncConfig {
    let repository = cli
        .repository
        .or_else(|| std::env::var("CI_REPOSITORY_URL").ok())
        .filter(|repo| !repo.trim().is_empty());

    SyncConfig {
        api_key: cli.api_token,
        repository,
        task_name: Some(cli.task),
        script_name,
        catalog_path: cli.catalog,
        api_base_url: cli.api_url,
        dry_run: cli.dry_run,
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
