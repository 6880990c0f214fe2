use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use skillset_fs::{io, list_files};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_copy_tree_reproduces_file_set() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    write(&src, "SKILL.md", "skill");
    write(&src, "assets/a.txt", "aaa");
    write(&src, "scripts/run.py", "print()");

    let dest = temp.path().join("out/widgets");
    let copied = io::copy_tree(&src, &dest).unwrap();

    assert_eq!(copied, 3);
    assert_eq!(list_files(&src).unwrap(), list_files(&dest).unwrap());
    assert_eq!(fs::read_to_string(dest.join("assets/a.txt")).unwrap(), "aaa");
}

#[test]
fn test_copy_tree_keeps_empty_directories() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(src.join("empty")).unwrap();

    let dest = temp.path().join("dest");
    io::copy_tree(&src, &dest).unwrap();

    assert!(dest.join("empty").is_dir());
}

#[test]
fn test_copy_tree_missing_source_fails() {
    let temp = TempDir::new().unwrap();
    let result = io::copy_tree(&temp.path().join("nope"), &temp.path().join("dest"));
    assert!(result.is_err());
}

#[test]
fn test_remove_tree_deletes_recursively() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("widgets");
    write(&target, "a/b/c.txt", "c");

    assert!(io::remove_tree(&target).unwrap());
    assert!(!target.exists());
}

#[test]
fn test_remove_tree_missing_is_noop() {
    let temp = TempDir::new().unwrap();
    assert!(!io::remove_tree(&temp.path().join("absent")).unwrap());
}

#[test]
fn test_file_size_reports_length() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "SKILL.md", "0123456789");
    assert_eq!(io::file_size(&temp.path().join("SKILL.md")), Some(10));
}

#[test]
fn test_file_size_missing_is_none() {
    let temp = TempDir::new().unwrap();
    assert_eq!(io::file_size(&temp.path().join("gone.txt")), None);
}

#[test]
fn test_ensure_dir_creates_parents() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a/b/c");
    io::ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn test_require_dir_rejects_missing_and_files() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "plain.txt", "x");

    assert!(io::require_dir(temp.path()).is_ok());
    assert!(io::require_dir(&temp.path().join("absent")).is_err());
    assert!(io::require_dir(&temp.path().join("plain.txt")).is_err());
}

#[cfg(unix)]
#[test]
fn test_entry_exists_sees_dangling_link() {
    let temp = TempDir::new().unwrap();
    let link = temp.path().join("widgets");
    std::os::unix::fs::symlink(temp.path().join("gone"), &link).unwrap();

    assert!(!link.exists());
    assert!(io::entry_exists(&link));
    assert!(io::remove_tree(&link).unwrap());
    assert!(!io::entry_exists(&link));
}
