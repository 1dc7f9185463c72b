//! Remote data sources.

pub mod google_fonts;

pub use google_fonts::{DEFAULT_BASE_URL, GoogleFontsClient};
