// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the file and directory operations.

use super::toolkit_in_tempdir;
use cmdkit_core::{
    ChmodOptions, ListOptions, MkdirOptions, RemoveOptions, SortKey, TouchOptions,
};

#[tokio::test]
async fn make_directory_is_relative_to_toolkit_cwd() {
    let (_dir, toolkit) = toolkit_in_tempdir();

    let result = toolkit.make_directory("made", &MkdirOptions::default()).await;

    assert!(result.success, "{result:?}");
    assert_eq!(result.command, "mkdir made");
    assert!(toolkit.working_dir().join("made").is_dir());
}

#[tokio::test]
async fn make_directory_with_parents_and_mode() {
    use std::os::unix::fs::PermissionsExt;
    let (_dir, toolkit) = toolkit_in_tempdir();

    let opts = MkdirOptions { parents: true, verbose: false, mode: Some(0o750) };
    let result = toolkit.make_directory("a/b/c", &opts).await;

    assert!(result.success, "{result:?}");
    assert_eq!(result.command, "mkdir -p -m750 a/b/c");
    let meta = std::fs::metadata(toolkit.working_dir().join("a/b/c")).unwrap();
    assert_eq!(meta.permissions().mode() & 0o777, 0o750);
}

#[tokio::test]
async fn make_directory_existing_fails_with_stderr() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    std::fs::create_dir(toolkit.working_dir().join("dup")).unwrap();

    let result = toolkit.make_directory("dup", &MkdirOptions::default()).await;

    assert!(!result.success);
    assert!(matches!(result.exit_code, Some(code) if code != 0));
    assert!(!result.stderr.is_empty());
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn touch_then_list_shows_file() {
    let (_dir, toolkit) = toolkit_in_tempdir();

    let touched = toolkit.touch_file("notes.txt", &TouchOptions::default()).await;
    assert!(touched.success, "{touched:?}");

    let listed = toolkit.list_directory(".", &ListOptions::default()).await;
    assert!(listed.success, "{listed:?}");
    assert!(listed.stdout.lines().any(|line| line == "notes.txt"), "{}", listed.stdout);
}

#[tokio::test]
async fn touch_create_new_flag_does_not_create() {
    let (_dir, toolkit) = toolkit_in_tempdir();

    let opts = TouchOptions { create_new: true, verbose: false };
    let result = toolkit.touch_file("absent.txt", &opts).await;

    assert!(result.success, "{result:?}");
    assert!(!toolkit.working_dir().join("absent.txt").exists());
}

#[tokio::test]
async fn list_directory_all_and_sorted() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    let root = toolkit.working_dir().to_path_buf();
    std::fs::write(root.join("small"), "x").unwrap();
    std::fs::write(root.join("large"), "x".repeat(4096)).unwrap();
    std::fs::write(root.join(".hidden"), "").unwrap();

    let opts = ListOptions { long: false, all: true, sort: Some(SortKey::Size) };
    let result = toolkit.list_directory("", &opts).await;

    assert!(result.success, "{result:?}");
    assert_eq!(result.command, "ls -a -S .");
    let names: Vec<&str> = result.stdout.lines().collect();
    assert!(names.contains(&".hidden"));
    let large = names.iter().position(|n| *n == "large").unwrap();
    let small = names.iter().position(|n| *n == "small").unwrap();
    assert!(large < small, "{names:?}");
}

#[tokio::test]
async fn list_missing_path_reports_exit_code() {
    let (_dir, toolkit) = toolkit_in_tempdir();

    let result = toolkit.list_directory("no-such-dir", &ListOptions::default()).await;

    assert!(!result.success);
    assert!(result.ran());
    assert!(result.stderr.contains("no-such-dir"), "{}", result.stderr);
}

#[tokio::test]
async fn remove_recursive_force_deletes_tree() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    let root = toolkit.working_dir().to_path_buf();
    std::fs::create_dir_all(root.join("a/nested")).unwrap();
    std::fs::write(root.join("b"), "").unwrap();

    let opts = RemoveOptions { recursive: true, force: true, ..RemoveOptions::default() };
    let result = toolkit.remove(&["a", "b"], &opts).await;

    assert!(result.success, "{result:?}");
    assert_eq!(result.command, "rm -r -f a b");
    assert!(!root.join("a").exists());
    assert!(!root.join("b").exists());
}

#[tokio::test]
async fn remove_missing_without_force_fails() {
    let (_dir, toolkit) = toolkit_in_tempdir();

    let result = toolkit.remove(&["ghost"], &RemoveOptions::default()).await;

    assert!(!result.success);
    assert!(result.ran());
    assert!(result.stderr.contains("ghost"), "{}", result.stderr);
}

#[tokio::test]
async fn change_mode_sets_permissions() {
    use std::os::unix::fs::PermissionsExt;
    let (_dir, toolkit) = toolkit_in_tempdir();
    let file = toolkit.working_dir().join("run.sh");
    std::fs::write(&file, "#!/bin/sh\n").unwrap();

    let result = toolkit.change_mode("700", "run.sh", &ChmodOptions::default()).await;

    assert!(result.success, "{result:?}");
    let mode = std::fs::metadata(&file).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o700);
}

#[tokio::test]
async fn change_owner_records_owner_and_group() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    std::fs::write(toolkit.working_dir().join("f"), "").unwrap();

    let opts = cmdkit_core::ChownOptions { group: Some("nogroup".to_string()), recursive: true };
    let result = toolkit.change_owner("nobody", "f", &opts).await;

    // Whether this succeeds depends on privileges; the invocation shape does not.
    assert_eq!(result.command, "chown -R nobody:nogroup f");
    assert_eq!(toolkit.history_len(), 1);
}
