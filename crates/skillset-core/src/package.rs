//! Package discovery under the source root

use std::fs;
use std::path::Path;

use skillset_fs::Error as FsError;
use tracing::{debug, warn};

use crate::Result;

/// Names of the packages under `source_root`, sorted.
///
/// A package is an immediate subdirectory (or a link to one). Hidden directories are not
/// packages, and names that are not valid UTF-8 are skipped with a warning.
///
/// # Errors
///
/// Returns an error if `source_root` cannot be read.
pub fn discover_packages(source_root: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(source_root).map_err(|e| FsError::io(source_root, e))?;
    let mut packages = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| FsError::io(source_root, e))?;
        // Symlinked package directories count too
        if !entry.path().is_dir() {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            warn!(path = %entry.path().display(), "skipping package with non UTF-8 name");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        packages.push(name);
    }

    packages.sort();
    debug!(count = packages.len(), "discovered packages");
    Ok(packages)
}
