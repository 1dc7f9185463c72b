//! Input/output helpers.
//!
//! - catalog snapshot read/write (`catalog`)

pub mod catalog;

pub use catalog::*;
