//! Catalog comparison.
//!
//! Entries are matched by family name, so reordering the remote list does not
//! produce spurious changes and families added or dropped upstream are
//! reported instead of silently skipped.

use std::collections::HashMap;

use crate::domain::{FontCatalog, FontEntry};
use crate::error::AppError;

/// One family-level difference between two catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyChange {
    Updated {
        family: String,
        old_version: String,
        new_version: String,
        old_modified: String,
        new_modified: String,
    },
    Added {
        family: String,
        version: String,
        modified: String,
    },
    Removed {
        family: String,
        version: String,
        modified: String,
    },
}

impl FamilyChange {
    pub fn family(&self) -> &str {
        match self {
            Self::Updated { family, .. } | Self::Added { family, .. } | Self::Removed { family, .. } => family,
        }
    }
}

/// Result of a full comparison pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeReport {
    /// The two catalogs are identical.
    NoChanges,
    /// Family-level changes. Empty when only untracked fields differ.
    Changes(Vec<FamilyChange>),
}

impl ChangeReport {
    pub fn changes(&self) -> &[FamilyChange] {
        match self {
            Self::NoChanges => &[],
            Self::Changes(changes) => changes,
        }
    }
}

/// Compare `old` against `new`.
///
/// Records follow the order of `new` for updates and additions, followed by
/// removals in the order of `old`. Fails if either catalog lists a family
/// more than once.
pub fn compare_catalogs(old: &FontCatalog, new: &FontCatalog) -> Result<ChangeReport, AppError> {
    let old_by_family = index_by_family(old, "local")?;
    let new_by_family = index_by_family(new, "remote")?;

    if old == new {
        return Ok(ChangeReport::NoChanges);
    }

    let mut changes = Vec::new();
    for entry in &new.items {
        match old_by_family.get(entry.family.as_str()) {
            Some(prev) if prev.version != entry.version || prev.last_modified != entry.last_modified => {
                changes.push(FamilyChange::Updated {
                    family: entry.family.clone(),
                    old_version: prev.version.clone(),
                    new_version: entry.version.clone(),
                    old_modified: prev.last_modified.clone(),
                    new_modified: entry.last_modified.clone(),
                });
            }
            Some(_) => {}
            None => changes.push(FamilyChange::Added {
                family: entry.family.clone(),
                version: entry.version.clone(),
                modified: entry.last_modified.clone(),
            }),
        }
    }
    for entry in &old.items {
        if !new_by_family.contains_key(entry.family.as_str()) {
            changes.push(FamilyChange::Removed {
                family: entry.family.clone(),
                version: entry.version.clone(),
                modified: entry.last_modified.clone(),
            });
        }
    }

    tracing::debug!(records = changes.len(), "compared catalogs");
    Ok(ChangeReport::Changes(changes))
}

fn index_by_family<'a>(catalog: &'a FontCatalog, label: &str) -> Result<HashMap<&'a str, &'a FontEntry>, AppError> {
    let mut index = HashMap::with_capacity(catalog.len());
    for entry in &catalog.items {
        if index.insert(entry.family.as_str(), entry).is_some() {
            return Err(AppError::parse(format!(
                "Duplicate family '{}' in {label} catalog",
                entry.family
            )));
        }
    }
    Ok(index)
}
