//! Command-line parsing for the font catalog sync.
//!
//! Every option can also come from the environment (or a `.env` file), which
//! is how CI supplies the API key.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::data::DEFAULT_BASE_URL;

pub const DEFAULT_CATALOG_PATH: &str = "lawnchair/assets/google_fonts.json";
pub const DEFAULT_TASK_NAME: &str = "Update Google Font";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "fontsync",
    version,
    about = "Refresh the local Google Fonts catalog and print a Markdown change summary"
)]
pub struct Cli {
    /// Google Fonts Developer API key.
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Local catalog snapshot to compare against and overwrite.
    #[arg(long, value_name = "JSON", default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Base URL of the Google Fonts API.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Repository shown in the summary (falls back to CI_REPOSITORY_URL).
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Task name shown in the summary.
    #[arg(long, default_value = DEFAULT_TASK_NAME)]
    pub task: String,

    /// Do everything except overwrite the local snapshot.
    #[arg(long)]
    pub dry_run: bool,

    /// Log more to stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
