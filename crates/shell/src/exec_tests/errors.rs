// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for results that carry no exit code.

use super::run;
use crate::exec::Executor;
use cmdkit_core::{Invocation, Outcome};

#[tokio::test]
async fn missing_executable_is_launch_failure() {
    let result = run(&["nonexistent_command_xyz_12345", "--flag"]).await;
    assert!(!result.success);
    assert_eq!(result.exit_code, None);
    assert_eq!(result.outcome(), Outcome::Failed);
    assert_eq!(result.command, "nonexistent_command_xyz_12345 --flag");
    let error = result.error.unwrap();
    assert!(error.contains("failed to spawn"), "error = {error}");
    assert!(error.contains("nonexistent_command_xyz_12345"), "error = {error}");
}

#[tokio::test]
async fn missing_working_directory_is_launch_failure() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("gone");
    let result = Executor::new().run(&Invocation::new("true"), &gone).await;
    assert!(!result.success);
    assert_eq!(result.exit_code, None);
    assert!(result.error.is_some());
}

#[tokio::test]
async fn empty_invocation_is_rejected() {
    let result = run(&[]).await;
    assert!(!result.success);
    assert_eq!(result.exit_code, None);
    assert!(result.error.unwrap().contains("empty invocation"));
}

#[tokio::test]
async fn signaled_child_has_no_exit_code() {
    let result = run(&["sh", "-c", "echo out; echo diag >&2; kill -9 $$"]).await;
    assert!(!result.success);
    assert_eq!(result.exit_code, None);
    assert_eq!(result.outcome(), Outcome::Failed);
    // Output written before the signal is kept
    assert_eq!(result.stdout, "out\n");
    assert_eq!(result.stderr, "diag\n");
    let error = result.error.unwrap();
    assert!(error.contains("signal 9"), "error = {error}");
}

#[test]
fn error_display_names_the_command() {
    let err = crate::exec::ExecError::SpawnFailed {
        command: "ls -l".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    };
    assert!(err.to_string().starts_with("failed to spawn `ls -l`"), "{err}");
}
