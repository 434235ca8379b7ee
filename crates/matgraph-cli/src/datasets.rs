//! Discovery of matrix files in a datasets directory.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// List the regular files in `dir` with the given extension, sorted by name.
///
/// Entries that cannot be inspected are skipped with a warning.
///
/// # Errors
///
/// Returns [`Error::Io`] if `dir` cannot be read and [`Error::NoDatasets`] if
/// no file matches.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut datasets = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        let matches_extension = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches_extension && path.is_file() {
            datasets.push(path);
        }
    }

    if datasets.is_empty() {
        return Err(Error::NoDatasets(dir.to_path_buf()));
    }

    datasets.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(dir = %dir.display(), count = datasets.len(), "Discovered datasets");
    Ok(datasets)
}

/// The file name of a dataset for display, falling back to the full path.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
