//! Per-package file set comparison
//!
//! Paths are compared by exact normalized string. Content is never looked at:
//! a path present on both sides is always reported as an update, even if the
//! bytes are identical.

use skillset_fs::{NormalizedPath, RelativeFileSet};

/// Classification of every path in `old ∪ new`.
///
/// The three sets are pairwise disjoint and together cover both inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Installed but no longer shipped
    pub to_delete: RelativeFileSet,
    /// Shipped but not yet installed
    pub to_add: RelativeFileSet,
    /// Present on both sides; will be overwritten
    pub to_update: RelativeFileSet,
}

impl DiffResult {
    /// True when there is nothing on either side.
    pub fn is_empty(&self) -> bool {
        self.to_delete.is_empty() && self.to_add.is_empty() && self.to_update.is_empty()
    }

    /// Total number of classified paths.
    pub fn len(&self) -> usize {
        self.to_delete.len() + self.to_add.len() + self.to_update.len()
    }
}

/// Compare the installed file set `old` with the shipped file set `new`.
pub fn diff(old: &RelativeFileSet, new: &RelativeFileSet) -> DiffResult {
    let to_delete = old.difference(new).cloned().collect();
    let to_add = new.difference(old).cloned().collect();
    let to_update = old.intersection(new).cloned().collect();

    DiffResult {
        to_delete,
        to_add,
        to_update,
    }
}

/// Build a file set from string literals. Mostly useful in tests.
pub fn file_set<I, S>(paths: I) -> RelativeFileSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .map(|p| NormalizedPath::new(p.as_ref()))
        .collect()
}
