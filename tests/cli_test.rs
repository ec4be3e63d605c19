use std::fs::File;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn renamer() -> Command {
    Command::cargo_bin("renamer").expect("Binary should be built")
}

fn touch(root: &Path, name: &str) {
    File::create(root.join(name)).expect("Failed to create test file");
}

#[test]
fn test_missing_action_exits_with_usage() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    renamer()
        .arg("-t")
        .arg(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("At least one of the renaming actions"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_conflicting_case_flags_exit_with_usage() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    touch(temp_dir.path(), "a.txt");

    renamer()
        .args(["-l", "-u", "-t"])
        .arg(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Can't use both lowercase and uppercase"));

    assert!(temp_dir.path().join("a.txt").exists());
}

#[test]
fn test_conflicting_actions_exit_with_usage() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    touch(temp_dir.path(), "a.txt");

    renamer()
        .args(["-p", "x_", "-s", "_y", "-t"])
        .arg(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("prefix, suffix"));

    assert!(temp_dir.path().join("a.txt").exists());
}

#[test]
fn test_invalid_regexp_exits_with_usage() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    touch(temp_dir.path(), "a.txt");

    renamer()
        .args(["-u", "-x", "(", "-t"])
        .arg(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid regexp"));
}

#[test]
fn test_no_match_exits_with_failure() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    touch(temp_dir.path(), "a.txt");

    renamer()
        .args(["-u", "-x", "^z", "-t"])
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No files matched"));

    assert!(temp_dir.path().join("a.txt").exists());
}

#[test]
fn test_uppercase_with_regexp() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    touch(temp_dir.path(), "a.TXT");
    touch(temp_dir.path(), "b.txt");

    renamer()
        .args(["--uppercase", "--regexp", "^a", "--target-dir"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Renaming"))
        .stdout(predicate::str::contains("Renaming complete"));

    assert!(temp_dir.path().join("A.TXT").exists());
    assert!(temp_dir.path().join("b.txt").exists());
}

#[test]
fn test_dry_run_changes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    touch(temp_dir.path(), "photo.jpg");

    renamer()
        .args(["-s", "_edit", "-n", "-t"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("photo_edit.jpg (dry-run)"));

    assert!(temp_dir.path().join("photo.jpg").exists());
    assert!(!temp_dir.path().join("photo_edit.jpg").exists());
}

#[test]
fn test_existing_destination_fails_the_run() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    touch(temp_dir.path(), "a.txt");
    touch(temp_dir.path(), "x_a.txt");

    renamer()
        .args(["-p", "x_", "-x", "^a", "-t"])
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("Not all files were correctly renamed"));

    assert!(temp_dir.path().join("a.txt").exists());
}

#[test]
fn test_copy_with_index() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    touch(temp_dir.path(), "a.jpg");
    touch(temp_dir.path(), "b.jpg");

    renamer()
        .args(["-i", "img", "-I", "10", "-c", "-t"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Copying"));

    for name in ["a.jpg", "b.jpg", "img010.jpg", "img011.jpg"] {
        assert!(temp_dir.path().join(name).exists(), "{name} should exist");
    }
}

#[test]
fn test_prefix_with_separator_exits_with_usage() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    touch(temp_dir.path(), "a.txt");
    std::fs::create_dir(temp_dir.path().join("sub")).expect("Failed to create subdirectory");

    renamer()
        .args(["-p", "sub/", "-f", "-t"])
        .arg(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("can't contain a path separator"));

    assert!(temp_dir.path().join("a.txt").exists());
    assert!(!temp_dir.path().join("sub").join("a.txt").exists());
}
