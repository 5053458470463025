// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    zero      = { 0,   true,  Outcome::Succeeded },
    one       = { 1,   false, Outcome::Exited(1) },
    two       = { 2,   false, Outcome::Exited(2) },
    negative  = { -1,  false, Outcome::Exited(-1) },
    high      = { 127, false, Outcome::Exited(127) },
)]
fn completed_success_iff_zero(code: i32, success: bool, outcome: Outcome) {
    let result = ExecutionResult::completed("prog", code, "out", "err");
    assert_eq!(result.success, success);
    assert_eq!(result.exit_code, Some(code));
    assert_eq!(result.outcome(), outcome);
    assert!(result.ran());
    assert!(result.error.is_none());
}

#[test]
fn failed_has_no_exit_code() {
    let result = ExecutionResult::failed("nope", "No such file or directory (os error 2)");
    assert!(!result.success);
    assert!(!result.ran());
    assert_eq!(result.exit_code, None);
    assert_eq!(result.outcome(), Outcome::Failed);
    assert_eq!(result.error.as_deref(), Some("No such file or directory (os error 2)"));
    assert!(result.stdout.is_empty());
    assert!(result.stderr.is_empty());
}

#[test]
fn with_output_keeps_failure_and_captured_text() {
    let result = ExecutionResult::failed("sh -c crash", "terminated by signal 9")
        .with_output("partial\n", "diag\n");
    assert!(!result.success);
    assert_eq!(result.exit_code, None);
    assert_eq!(result.outcome(), Outcome::Failed);
    assert_eq!(result.stdout, "partial\n");
    assert_eq!(result.stderr, "diag\n");
    assert_eq!(result.error.as_deref(), Some("terminated by signal 9"));
}

#[test]
fn in_process_succeeds_without_exit_code() {
    let result = ExecutionResult::in_process("cd /tmp", Summary::current_directory("/tmp"));
    assert!(result.success);
    assert_eq!(result.exit_code, None);
    assert_eq!(result.outcome(), Outcome::Succeeded);
    assert_eq!(
        result.summary.and_then(|s| s.current_directory).as_deref(),
        Some("/tmp")
    );
}

#[test]
fn with_summary_attaches_username() {
    let result =
        ExecutionResult::completed("whoami", 0, "alice\n", "").with_summary(Summary::username("alice"));
    let summary = result.summary.unwrap();
    assert_eq!(summary.username.as_deref(), Some("alice"));
    assert_eq!(summary.current_directory, None);
}

#[test]
fn json_omits_absent_fields() {
    let result = ExecutionResult::failed("sleep 60", "timed out");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["command"], "sleep 60");
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "timed out");
    assert!(json.get("exit_code").is_none());
    assert!(json.get("summary").is_none());
}

#[test]
fn json_includes_exit_code_and_output() {
    let result = ExecutionResult::completed("ls", 2, "", "ls: cannot access 'x'\n");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["exit_code"], 2);
    assert_eq!(json["stderr"], "ls: cannot access 'x'\n");
    assert!(json.get("error").is_none());
}
