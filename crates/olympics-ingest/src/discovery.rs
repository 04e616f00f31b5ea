//! Dataset file discovery.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use olympics_model::DatasetKind;

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory, sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Matches CSV files to known datasets by file stem (case-insensitive).
///
/// Unrecognized files are skipped. If two files map to the same dataset,
/// the first in filename order wins.
pub fn discover_datasets(files: &[PathBuf]) -> BTreeMap<DatasetKind, PathBuf> {
    let mut found = BTreeMap::new();
    for path in files {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        match stem.parse::<DatasetKind>() {
            Ok(kind) => {
                found.entry(kind).or_insert_with(|| path.clone());
            }
            Err(_) => {
                tracing::debug!(path = %path.display(), "skipping unrecognized CSV file");
            }
        }
    }
    found
}
