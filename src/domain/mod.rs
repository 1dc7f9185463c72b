//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the catalog model (`FontCatalog`, `FontEntry`)
//! - the resolved run configuration (`SyncConfig`)

pub mod types;

pub use types::*;
