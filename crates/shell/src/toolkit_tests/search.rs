// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for pattern search and file find.

use super::toolkit_in_tempdir;
use cmdkit_core::{FileType, FindOptions, GrepOptions};

fn seed(root: &std::path::Path) {
    std::fs::create_dir_all(root.join("src/deep")).unwrap();
    std::fs::write(root.join("src/main.rs"), "fn main() {}\n// TODO: wire config\n").unwrap();
    std::fs::write(root.join("src/deep/lib.rs"), "// todo lowercase\n").unwrap();
    std::fs::write(root.join("README.md"), "nothing here\n").unwrap();
}

#[tokio::test]
async fn pattern_search_finds_matching_line() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    seed(toolkit.working_dir());

    let result = toolkit.pattern_search("TODO", "src/main.rs", &GrepOptions::default()).await;

    assert!(result.success, "{result:?}");
    assert_eq!(result.stdout, "// TODO: wire config\n");
}

#[tokio::test]
async fn pattern_search_recursive_ignore_case() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    seed(toolkit.working_dir());

    let opts = GrepOptions { ignore_case: true, recursive: true };
    let result = toolkit.pattern_search("todo", "src", &opts).await;

    assert!(result.success, "{result:?}");
    assert_eq!(result.command, "grep -i -r todo src");
    assert_eq!(result.stdout.lines().count(), 2, "{}", result.stdout);
}

#[tokio::test]
async fn pattern_search_without_match_exits_one() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    seed(toolkit.working_dir());

    let result = toolkit.pattern_search("absent", "README.md", &GrepOptions::default()).await;

    assert!(!result.success);
    assert_eq!(result.exit_code, Some(1));
    assert_eq!(result.stdout, "");
}

#[tokio::test]
async fn pattern_search_empty_pattern_prints_every_line() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    seed(toolkit.working_dir());

    let result = toolkit.pattern_search("", "src/main.rs", &GrepOptions::default()).await;

    assert!(result.success, "{result:?}");
    assert_eq!(result.command, "grep ^ src/main.rs");
    assert_eq!(result.stdout, "fn main() {}\n// TODO: wire config\n");
}

#[tokio::test]
async fn find_files_by_name_and_type() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    seed(toolkit.working_dir());

    let opts = FindOptions {
        name: Some("*.rs".to_string()),
        file_type: Some(FileType::File),
        ..FindOptions::default()
    };
    let result = toolkit.find_files(".", &opts).await;

    assert!(result.success, "{result:?}");
    let mut found: Vec<&str> = result.stdout.lines().collect();
    found.sort_unstable();
    assert_eq!(found, ["./src/deep/lib.rs", "./src/main.rs"]);
}

#[tokio::test]
async fn find_files_honors_max_depth() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    seed(toolkit.working_dir());

    let opts = FindOptions {
        file_type: Some(FileType::Directory),
        max_depth: Some(1),
        ..FindOptions::default()
    };
    let result = toolkit.find_files(".", &opts).await;

    assert!(result.success, "{result:?}");
    let mut found: Vec<&str> = result.stdout.lines().collect();
    found.sort_unstable();
    assert_eq!(found, [".", "./src"]);
}

#[tokio::test]
async fn find_files_missing_start_fails() {
    let (_dir, toolkit) = toolkit_in_tempdir();

    let result = toolkit.find_files("nowhere", &FindOptions::default()).await;

    assert!(!result.success);
    assert!(result.ran());
    assert!(result.stderr.contains("nowhere"));
}
