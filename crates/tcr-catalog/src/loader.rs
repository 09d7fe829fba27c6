//! Catalog file discovery.

use std::fs;
use std::path::Path;

use crate::types::{CatalogError, CatalogFiles, CatalogResult};

/// Discovers the catalog files in a directory.
///
/// Looks for `conditions*.csv` and `concepts*.csv` directly inside `path`.
/// Both must be present.
pub fn discover_catalog_files<P: AsRef<Path>>(path: P) -> CatalogResult<CatalogFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(CatalogError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut files = CatalogFiles::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let filename = entry.file_name();
        let filename_str = filename.to_string_lossy();

        if !filename_str.ends_with(".csv") {
            continue;
        }

        if filename_str.starts_with("conditions") {
            files.conditions_file = Some(entry.path());
        } else if filename_str.starts_with("concepts") {
            files.concepts_file = Some(entry.path());
        }
    }

    if !files.has_required_files() {
        let missing = files.missing_files();
        return Err(CatalogError::RequiredFileMissing {
            file_type: missing.join(", "),
            directory: path.display().to_string(),
        });
    }

    Ok(files)
}
