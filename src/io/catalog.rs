//! Read/write the local catalog snapshot.
//!
//! The snapshot uses the same JSON shape as the API response. Writes go to a
//! temporary file next to the target which is then renamed over it, so a
//! failed run never leaves a truncated snapshot behind.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::FontCatalog;
use crate::error::AppError;

/// What `write_catalog` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// Dry run: the file was left untouched.
    Skipped,
}

/// Read a catalog snapshot.
pub fn read_catalog(path: &Path) -> Result<FontCatalog, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::storage(format!("Failed to open catalog '{}'", path.display())).with_cause(e)
    })?;
    let catalog: FontCatalog = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AppError::storage(format!("Invalid catalog JSON in '{}'", path.display())).with_cause(e)
    })?;
    tracing::info!(path = %path.display(), families = catalog.len(), "loaded local catalog");
    Ok(catalog)
}

/// Replace the snapshot at `path` with `catalog`, unless `dry_run` is set.
pub fn write_catalog(path: &Path, catalog: &FontCatalog, dry_run: bool) -> Result<WriteOutcome, AppError> {
    if dry_run {
        tracing::info!(path = %path.display(), "dry run, skipping catalog write");
        return Ok(WriteOutcome::Skipped);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(|e| {
        AppError::storage(format!("Failed to create temporary file in '{}'", dir.display())).with_cause(e)
    })?;

    let mut writer = BufWriter::new(tmp.as_file());
    serde_json::to_writer(&mut writer, catalog)
        .map_err(|e| AppError::storage("Failed to serialize catalog").with_cause(e))?;
    writer
        .flush()
        .map_err(|e| AppError::storage("Failed to flush catalog").with_cause(e))?;
    drop(writer);

    // The temp file is created owner-only; keep the existing snapshot's mode.
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions()).map_err(|e| {
            AppError::storage(format!("Failed to copy permissions of '{}'", path.display())).with_cause(e)
        })?;
    }

    tmp.persist(path).map_err(|e| {
        AppError::storage(format!("Failed to replace '{}'", path.display())).with_cause(e.error)
    })?;

    tracing::info!(path = %path.display(), families = catalog.len(), "wrote catalog");
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FontEntry;
    use crate::error::ErrorKind;

    fn sample() -> FontCatalog {
        FontCatalog::new(vec![
            FontEntry::new("Roboto", "v30", "2022-09-22"),
            FontEntry::new("Lato", "v24", "2023-01-10"),
        ])
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts.json");

        let outcome = write_catalog(&path, &sample(), false).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(read_catalog(&path).unwrap(), sample());
    }

    #[test]
    fn dry_run_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts.json");
        std::fs::write(&path, "original contents").unwrap();

        let outcome = write_catalog(&path, &sample(), true).unwrap();
        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original contents");
    }

    #[test]
    fn dry_run_does_not_create_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts.json");

        write_catalog(&path, &sample(), true).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn missing_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_catalog(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(err.trace().is_some());
    }

    #[test]
    fn document_without_items_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts.json");
        std::fs::write(&path, r#"{"kind":"webfonts#webfontList"}"#).unwrap();

        let err = read_catalog(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[cfg(unix)]
    #[test]
    fn rewrite_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts.json");
        std::fs::write(&path, "{\"items\":[]}").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        write_catalog(&path, &sample(), false).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        assert_eq!(read_catalog(&path).unwrap(), sample());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("fonts.json");

        let err = write_catalog(&path, &sample(), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
