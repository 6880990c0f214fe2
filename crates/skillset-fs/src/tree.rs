//! Recursive listing of the regular files under a directory

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::{Error, NormalizedPath, Result};

/// Package-relative file paths, iterated in lexicographic order.
pub type RelativeFileSet = BTreeSet<NormalizedPath>;

/// List every regular file beneath `root`, relative to `root`.
///
/// A missing `root` yields an empty set: a package that has never been
/// installed simply has no files yet. Symbolic links are not followed and
/// not yielded, and directories only contribute the files they contain.
///
/// # Errors
///
/// Returns [`Error::Walk`] if a directory inside the tree cannot be read.
pub fn list_files(root: &Path) -> Result<RelativeFileSet> {
    let mut files = RelativeFileSet::new();

    if !root.is_dir() {
        debug!(root = %root.display(), "tree absent, listing as empty");
        return Ok(files);
    }

    for entry in WalkDir::new(root).follow_links(false).min_depth(1) {
        let entry = entry.map_err(|e| Error::walk(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| Error::OutsideRoot {
                path: entry.path().to_path_buf(),
                root: root.to_path_buf(),
            })?;
        files.insert(NormalizedPath::new(relative));
    }

    debug!(root = %root.display(), count = files.len(), "listed tree");
    Ok(files)
}
