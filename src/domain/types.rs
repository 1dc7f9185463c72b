//! Shared domain types.
//!
//! Catalog types mirror the Google Fonts `webfonts` response. Only the fields
//! the comparison needs are typed; everything else rides along in `extra` so a
//! snapshot can be rewritten without losing data.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A font catalog as returned by the API and stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontCatalog {
    pub items: Vec<FontEntry>,
    /// Top-level fields other than `items` (e.g. `kind`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FontCatalog {
    pub fn new(items: Vec<FontEntry>) -> Self {
        Self {
            items,
            extra: Map::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One font family's metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontEntry {
    pub family: String,
    pub version: String,
    /// Kept as the API's `YYYY-MM-DD` string so it round-trips verbatim.
    #[serde(rename = "lastModified")]
    pub last_modified: String,
    /// Variants, subsets, files, category, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FontEntry {
    pub fn new(
        family: impl Into<String>,
        version: impl Into<String>,
        last_modified: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            version: version.into(),
            last_modified: last_modified.into(),
            extra: Map::new(),
        }
    }
}

/// Everything a single sync run needs, resolved once from CLI/env.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Google Fonts API key. Never defaulted in code.
    pub api_key: Option<String>,
    /// Repository identifier shown in the report title.
    pub repository: Option<String>,
    pub task_name: Option<String>,
    /// Name the report uses when no task name is set (usually argv[0]).
    pub script_name: String,
    pub catalog_path: PathBuf,
    pub api_base_url: String,
    /// Run everything but skip the final write.
    pub dry_run: bool,
}
