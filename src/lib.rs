//! `fontsync` library crate.
//!
//! The binary (`fontsync`) is a thin wrapper around this library so that:
//!
//! - the pipeline is testable without spawning processes
//! - each stage (fetch, store, compare, report) can be exercised on its own

pub mod app;
pub mod cli;
pub mod compare;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
