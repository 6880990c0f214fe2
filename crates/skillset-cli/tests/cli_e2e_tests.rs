//! CLI end-to-end tests that invoke the compiled `install-skills` binary.
//!
//! Every test passes `--source`/`--dest` (or the environment fallbacks) so the
//! run never touches the real home directory.

use assert_cmd::Command;
use predicates::prelude::*;
use skillset_test_utils::TestTree;

/// `install-skills` with both roots pointed into `tree` and color disabled.
fn install(tree: &TestTree) -> Command {
    let mut cmd = Command::cargo_bin("install-skills").unwrap();
    cmd.env_remove("SKILLS_DEST_DIR")
        .env_remove("SKILLS_SOURCE_DIR")
        .env("NO_COLOR", "1")
        .arg("--source")
        .arg(tree.source())
        .arg("--dest")
        .arg(tree.dest());
    cmd
}

fn scenario_b(tree: &TestTree) {
    tree.dest_file("widgets", "SKILL.md", "0123456789")
        .dest_file("widgets", "old.txt", "old");
    tree.source_file("widgets", "SKILL.md", "0123456789abcd")
        .source_file("widgets", "new.txt", "new");
}

// ============================================================================
// Invocation surface
// ============================================================================

#[test]
fn test_help_exits_zero() {
    Command::cargo_bin("install-skills")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--yes"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("install-skills")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("install-skills"));
}

#[test]
fn test_unknown_flag_is_rejected_before_processing() {
    let tree = TestTree::new();
    tree.source_file("widgets", "SKILL.md", "w");

    install(&tree)
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"))
        .stderr(predicate::str::contains("--help"));

    assert!(!tree.dest().exists());
}

#[test]
fn test_positional_argument_is_rejected() {
    let tree = TestTree::new();
    install(&tree)
        .arg("widgets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("widgets"));
}

#[test]
fn test_missing_source_exits_one() {
    let tree = TestTree::new();
    Command::cargo_bin("install-skills")
        .unwrap()
        .env_remove("SKILLS_SOURCE_DIR")
        .arg("--source")
        .arg(tree.root().join("no-such-dir"))
        .arg("--dest")
        .arg(tree.dest())
        .arg("--yes")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Source directory not found"));

    assert!(!tree.dest().exists());
}

// ============================================================================
// Runs
// ============================================================================

#[test]
fn test_auto_confirm_installs_new_skill() {
    let tree = TestTree::new();
    tree.source_file("widgets", "SKILL.md", "# Widgets")
        .source_file("widgets", "assets/a.txt", "a");

    install(&tree)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files to install:"))
        .stdout(predicate::str::contains("installed: 1"));

    tree.assert_dest_files("widgets", &["SKILL.md", "assets/a.txt"]);
}

#[test]
fn test_dry_run_leaves_disk_untouched() {
    let tree = TestTree::new();
    scenario_b(&tree);
    let before = tree.snapshot();

    install(&tree)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("would update: 1"));

    assert_eq!(tree.snapshot(), before);
}

#[test]
fn test_verbose_update_reports_size_delta() {
    let tree = TestTree::new();
    scenario_b(&tree);

    install(&tree)
        .args(["--yes", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Old: 10 bytes, New: 14 bytes (+4 bytes)",
        ));

    tree.assert_dest_files("widgets", &["SKILL.md", "new.txt"]);
}

#[test]
fn test_piped_no_declines() {
    let tree = TestTree::new();
    tree.source_file("widgets", "SKILL.md", "w");

    install(&tree)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Install skill 'widgets'? [Y/n]"))
        .stdout(predicate::str::contains("skipped: 1"));

    assert!(!tree.dest().join("widgets").exists());
}

#[test]
fn test_piped_empty_answer_accepts() {
    let tree = TestTree::new();
    tree.source_file("widgets", "SKILL.md", "w");

    install(&tree)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("installed: 1"));

    tree.assert_dest_files("widgets", &["SKILL.md"]);
}

#[test]
fn test_dest_from_environment() {
    let tree = TestTree::new();
    tree.source_file("widgets", "SKILL.md", "w");

    Command::cargo_bin("install-skills")
        .unwrap()
        .env("SKILLS_SOURCE_DIR", tree.source())
        .env("SKILLS_DEST_DIR", tree.dest())
        .env("NO_COLOR", "1")
        .arg("-y")
        .assert()
        .success();

    tree.assert_dest_files("widgets", &["SKILL.md"]);
}
