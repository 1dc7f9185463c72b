//! Markdown rendering for the CI summary.
//!
//! Formatting is kept in one place so the pipeline only hands over structured
//! results and wording changes stay local.

use crate::compare::{ChangeReport, FamilyChange};
use crate::error::AppError;

pub const NO_CHANGES: &str = "🗿 No changes detected in font data";
pub const BLANK_PLACEHOLDER: &str =
    "\nThe summary of the changes was not passed to me so this will remain blank\n";
pub const NO_TRACE: &str = "... No stack trace available?";

const TABLE_HEADER: &str = "| Font Family | Version | Date |\n|---|---|---|\n";

/// Inputs for `render_summary`. Every field is optional.
#[derive(Debug, Default)]
pub struct SummaryRequest<'a> {
    pub repository: Option<&'a str>,
    pub task_name: Option<&'a str>,
    /// Used in place of the task name, and in the explanatory line.
    pub script_name: Option<&'a str>,
    pub table: Option<&'a str>,
    pub error: Option<&'a AppError>,
}

/// Render a change report as a Markdown table, or the no-change marker.
pub fn format_change_table(report: &ChangeReport) -> String {
    let changes = match report {
        ChangeReport::NoChanges => return NO_CHANGES.to_string(),
        ChangeReport::Changes(changes) => changes,
    };

    let mut out = String::from(TABLE_HEADER);
    for change in changes {
        out.push_str(&format_row(change));
        out.push('\n');
    }
    out
}

fn format_row(change: &FamilyChange) -> String {
    match change {
        FamilyChange::Updated {
            family,
            old_version,
            new_version,
            old_modified,
            new_modified,
        } => format!(
            "| {} | {} -> **{}** | {} -> **{}** |",
            cell(family),
            cell(old_version),
            cell(new_version),
            cell(old_modified),
            cell(new_modified)
        ),
        FamilyChange::Added {
            family,
            version,
            modified,
        } => format!(
            "| {} | _added_ -> **{}** | _added_ -> **{}** |",
            cell(family),
            cell(version),
            cell(modified)
        ),
        FamilyChange::Removed {
            family,
            version,
            modified,
        } => format!(
            "| {} | {} -> ~~removed~~ | {} -> ~~removed~~ |",
            cell(family),
            cell(version),
            cell(modified)
        ),
    }
}

/// Escape pipes so a value cannot split a table cell.
fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Build the summary announcement, one entry per printed line.
///
/// Never fails and never returns an empty list.
pub fn render_summary(req: &SummaryRequest<'_>) -> Vec<String> {
    let script = format!("`{}`", req.script_name.unwrap_or("fontsync"));
    let mut lines = Vec::new();

    match req.repository {
        Some(repo) => {
            lines.push(format!("# 👷 {repo} Automated Maintenance"));
            lines.push(format!("This is auto-generated by {repo}'s {script} script."));
        }
        None => {
            lines.push("# 👷 Automated Maintenance".to_string());
            lines.push(format!("This is auto-generated by {script} script."));
        }
    }

    lines.push(format!("## {}", req.task_name.unwrap_or(script.as_str())));
    match (req.task_name, req.repository) {
        (Some(task), Some(repo)) => {
            lines.push(format!("{task} data for **{repo}**. Here's a summary of the changes:"))
        }
        _ => lines.push(format!("{script} data. Here's a summary of the changes:")),
    }

    lines.push(req.table.unwrap_or(BLANK_PLACEHOLDER).to_string());

    if let Some(err) = req.error {
        lines.push(format!("Error: {err}"));
        match err.trace() {
            Some(trace) => {
                lines.push("```".to_string());
                lines.push(trace);
                lines.push("```".to_string());
            }
            None => lines.push(NO_TRACE.to_string()),
        }
    }

    lines
}
