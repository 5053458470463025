// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    plain       = { false, false, &["grep", "TODO", "src"] },
    ignore_case = { true,  false, &["grep", "-i", "TODO", "src"] },
    recursive   = { false, true,  &["grep", "-r", "TODO", "src"] },
    both        = { true,  true,  &["grep", "-i", "-r", "TODO", "src"] },
)]
fn pattern_search_flags(ignore_case: bool, recursive: bool, expected: &[&str]) {
    let opts = GrepOptions { ignore_case, recursive };
    assert_eq!(pattern_search("TODO", "src", &opts), *expected);
}

#[test]
fn pattern_search_empty_pattern_matches_all() {
    let inv = pattern_search("", "notes.txt", &GrepOptions::default());
    assert_eq!(inv, ["grep", MATCH_ALL, "notes.txt"]);
}

#[test]
fn find_files_start_only() {
    assert_eq!(find_files(".", &FindOptions::default()), ["find", "."]);
}

#[test]
fn find_files_predicates_in_order() {
    let opts = FindOptions {
        name: Some("*.rs".to_string()),
        file_type: Some(FileType::File),
        min_size: Some("1k".to_string()),
        max_size: Some("10M".to_string()),
        max_depth: Some(2),
    };
    assert_eq!(
        find_files("/src", &opts),
        ["find", "/src", "-name", "*.rs", "-type", "f", "-size", "+1k", "-size", "-10M", "-maxdepth", "2"]
    );
}

#[test]
fn find_files_skips_empty_values() {
    let opts = FindOptions {
        name: Some(String::new()),
        min_size: Some(String::new()),
        max_depth: Some(0),
        ..FindOptions::default()
    };
    assert_eq!(find_files(".", &opts), ["find", ".", "-maxdepth", "0"]);
}
