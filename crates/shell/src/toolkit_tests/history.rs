// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for call history across operations.

use super::toolkit_in_tempdir;
use cmdkit_core::TouchOptions;

#[tokio::test]
async fn every_invocation_is_recorded_in_order() {
    let (_dir, mut toolkit) = toolkit_in_tempdir();

    toolkit.execute(["true"]).await;
    toolkit.execute(["false"]).await;
    toolkit.execute(["nonexistent_command_xyz_12345"]).await;
    toolkit.change_directory(Some("missing"));
    toolkit.touch_file("x", &TouchOptions::default()).await;

    let commands: Vec<String> = toolkit.history().into_iter().map(|r| r.command).collect();
    assert_eq!(commands, ["true", "false", "nonexistent_command_xyz_12345", "cd missing", "touch x"]);
    assert_eq!(toolkit.history_len(), 5);
}

#[tokio::test]
async fn history_entries_match_returned_results() {
    let (_dir, toolkit) = toolkit_in_tempdir();

    let first = toolkit.execute(["sh", "-c", "echo hi; exit 4"]).await;
    let second = toolkit.execute(["nonexistent_command_xyz_12345"]).await;

    assert_eq!(toolkit.history(), vec![first, second]);
}

#[tokio::test]
async fn history_json_is_an_array_of_results() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    toolkit.execute(["echo", "hi"]).await;
    toolkit.execute(["nonexistent_command_xyz_12345"]).await;

    let json = toolkit.history_json().unwrap();
    let parsed: Vec<cmdkit_core::ExecutionResult> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, toolkit.history());
    assert_eq!(parsed[0].stdout, "hi\n");
    assert_eq!(parsed[1].exit_code, None);
}

#[tokio::test]
async fn separate_toolkits_have_separate_histories() {
    let (_a, first) = toolkit_in_tempdir();
    let (_b, second) = toolkit_in_tempdir();

    first.execute(["true"]).await;

    assert_eq!(first.history_len(), 1);
    assert_eq!(second.history_len(), 0);
}
