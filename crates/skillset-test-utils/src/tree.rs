//! [`TestTree`] builder for installer scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

/// A temporary directory holding a `source/` and a `dest/` skills root.
///
/// # Example
///
/// ```rust,no_run
/// use skillset_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.source_file("widgets", "SKILL.md", "# Widgets");
/// tree.dest_file("widgets", "old.txt", "stale");
/// tree.assert_dest_files("widgets", &["old.txt"]);
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create a temporary directory with an empty `source/` root.
    ///
    /// The `dest/` root is not created; the installer is expected to.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("source")).unwrap();
        Self { temp_dir }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The source skills root.
    pub fn source(&self) -> PathBuf {
        self.root().join("source")
    }

    /// The destination skills root.
    pub fn dest(&self) -> PathBuf {
        self.root().join("dest")
    }

    /// Write `content` to `source/<package>/<rel>`, creating parents.
    pub fn source_file(&self, package: &str, rel: &str, content: &str) -> &Self {
        write_file(&self.source().join(package).join(rel), content);
        self
    }

    /// Write `content` to `dest/<package>/<rel>`, creating parents.
    pub fn dest_file(&self, package: &str, rel: &str, content: &str) -> &Self {
        write_file(&self.dest().join(package).join(rel), content);
        self
    }

    /// Relative `/`-separated paths of every regular file under `dir`, sorted.
    pub fn files_under(dir: &Path) -> Vec<String> {
        let mut files: Vec<String> = WalkDir::new(dir)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(dir)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        files.sort();
        files
    }

    /// Every file under the temp root mapped to its bytes.
    ///
    /// Two equal snapshots mean nothing on disk changed in between.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        Self::files_under(self.root())
            .into_iter()
            .map(|rel| {
                let bytes = fs::read(self.root().join(&rel)).unwrap();
                (rel, bytes)
            })
            .collect()
    }

    /// Assert that `dest/<package>` contains exactly `expected` (any order).
    ///
    /// # Panics
    /// Panics with both file lists if they differ.
    pub fn assert_dest_files(&self, package: &str, expected: &[&str]) {
        let actual = Self::files_under(&self.dest().join(package));
        let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(
            actual, expected,
            "dest/{package} does not hold the expected files"
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("TestTree: failed to create {}: {e}", parent.display()));
    }
    fs::write(path, content)
        .unwrap_or_else(|e| panic!("TestTree: failed to write {}: {e}", path.display()));
}
