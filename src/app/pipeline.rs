//! The sync pipeline: credential check -> fetch -> read local -> compare -> persist.
//!
//! Each stage converts its failure into an `AppError` carrying the stage's
//! exit code, so the caller only needs one failure path. `execute` runs the
//! stages and renders the summary for success and failure alike.

use crate::compare::{ChangeReport, compare_catalogs};
use crate::data::GoogleFontsClient;
use crate::domain::SyncConfig;
use crate::error::AppError;
use crate::io::catalog::{WriteOutcome, read_catalog, write_catalog};
use crate::report::{SummaryRequest, format_change_table, render_summary};

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ConfigCheck,
    Fetch,
    ReadLocal,
    Compare,
    Persist,
}

impl Stage {
    /// Process exit code for a failure in this stage. CI depends on these values.
    pub fn exit_code(self) -> u8 {
        match self {
            Stage::ConfigCheck => 1,
            Stage::Fetch | Stage::ReadLocal => 2,
            Stage::Compare | Stage::Persist => 3,
        }
    }

    fn context(self) -> Option<&'static str> {
        match self {
            Stage::ConfigCheck => None,
            Stage::Fetch => Some("Failed to fetch data from Google Fonts API"),
            Stage::ReadLocal => Some("Failed to read local font data"),
            Stage::Compare => Some("Failed to generate comparison table"),
            Stage::Persist => Some("Failed to write to local file"),
        }
    }

    fn fail(self, err: AppError) -> AppError {
        let err = match self.context() {
            Some(context) => err.context(context),
            None => err,
        };
        tracing::error!(stage = ?self, error = %err, "stage failed");
        err.with_exit_code(self.exit_code())
    }
}

/// Outputs of a successful run.
#[derive(Debug, Clone)]
pub struct SyncOutput {
    pub report: ChangeReport,
    pub write: WriteOutcome,
    /// Number of families in the fetched catalog.
    pub families: usize,
}

/// A finished run: the summary to print and the process exit code.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub lines: Vec<String>,
    pub exit_code: u8,
}

/// Run the pipeline and always produce the summary lines.
pub fn execute(config: &SyncConfig) -> RunOutcome {
    let outcome = run_sync(config);
    let lines = summarize(config, &outcome);
    let exit_code = match &outcome {
        Ok(_) => 0,
        Err(err) => err.exit_code(),
    };
    RunOutcome { lines, exit_code }
}

/// Run every stage, stopping at the first failure.
pub fn run_sync(config: &SyncConfig) -> Result<SyncOutput, AppError> {
    let client = GoogleFontsClient::new(config.api_key.as_deref(), &config.api_base_url)
        .map_err(|e| Stage::ConfigCheck.fail(e))?;

    let remote = client.fetch_catalog().map_err(|e| Stage::Fetch.fail(e))?;
    let local = read_catalog(&config.catalog_path).map_err(|e| Stage::ReadLocal.fail(e))?;

    let report = compare_catalogs(&local, &remote).map_err(|e| Stage::Compare.fail(e))?;
    let write = write_catalog(&config.catalog_path, &remote, config.dry_run)
        .map_err(|e| Stage::Persist.fail(e))?;

    tracing::info!(changes = report.changes().len(), ?write, "sync finished");
    Ok(SyncOutput {
        report,
        write,
        families: remote.len(),
    })
}

/// Render the CI summary for a finished run.
pub fn summarize(config: &SyncConfig, outcome: &Result<SyncOutput, AppError>) -> Vec<String> {
    let table = outcome.as_ref().ok().map(|out| format_change_table(&out.report));
    render_summary(&SummaryRequest {
        repository: config.repository.as_deref(),
        task_name: config.task_name.as_deref(),
        script_name: Some(config.script_name.as_str()),
        table: table.as_deref(),
        error: outcome.as_ref().err(),
    })
}
