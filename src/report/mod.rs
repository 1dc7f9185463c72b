//! Reporting: change tables and the CI summary announcement.

pub mod format;

pub use format::{SummaryRequest, format_change_table, render_summary};
