//! Subtree replacement primitives
//!
//! Installing a package is a full replace: the installed subtree is removed
//! and the source subtree is copied in its place. Neither step is atomic.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Create `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Whether anything occupies `path`, a dangling symbolic link included.
pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Fail unless `path` is a directory (following links).
pub fn require_dir(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        )),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Recursively delete `path` if it exists.
///
/// Returns `true` when something was removed.
pub fn remove_tree(path: &Path) -> Result<bool> {
    // symlink_metadata so a dangling link is still seen and removed
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::io(path, e)),
    };

    if meta.is_dir() {
        fs::remove_dir_all(path).map_err(|e| Error::io(path, e))?;
    } else {
        fs::remove_file(path).map_err(|e| Error::io(path, e))?;
    }

    debug!(path = %path.display(), "removed tree");
    Ok(true)
}

/// Recursively copy the directories and regular files of `src` into `dest`.
///
/// `dest` is created if missing. Symbolic links inside `src` are skipped, so
/// the copied file set matches what [`crate::list_files`] reports for `src`.
/// Returns the number of files copied.
///
/// # Errors
///
/// Fails on the first directory that cannot be walked or created, or the
/// first file that cannot be copied. Files copied before the failure stay.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<u64> {
    ensure_dir(dest)?;
    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(false).min_depth(1) {
        let entry = entry.map_err(|e| Error::walk(src, e))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| Error::OutsideRoot {
                path: entry.path().to_path_buf(),
                root: src.to_path_buf(),
            })?;
        let target = dest.join(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            ensure_dir(&target)?;
        } else if file_type.is_file() {
            if let Some(parent) = target.parent() {
                ensure_dir(parent)?;
            }
            fs::copy(entry.path(), &target).map_err(|e| Error::io(&target, e))?;
            copied += 1;
        } else {
            debug!(path = %entry.path().display(), "skipping non-regular entry");
        }
    }

    debug!(src = %src.display(), dest = %dest.display(), copied, "copied tree");
    Ok(copied)
}

/// Byte length of the file at `path`, or `None` if it cannot be stat'ed.
pub fn file_size(path: &Path) -> Option<u64> {
    fs::metadata(path).ok().map(|m| m.len())
}
