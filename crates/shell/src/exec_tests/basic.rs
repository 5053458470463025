// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for normal termination: exit codes, captured output, cwd and env.

use super::{run, run_with};
use crate::exec::Executor;
use cmdkit_core::{Invocation, Outcome};

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn zero_exit_is_success() {
    let result = run(&["true"]).await;
    assert!(result.success);
    assert_eq!(result.exit_code, Some(0));
    assert_eq!(result.stderr, "");
    assert_eq!(result.error, None);
    assert_eq!(result.outcome(), Outcome::Succeeded);
}

#[tokio::test]
async fn non_zero_exit_keeps_code_and_stderr() {
    let result = run(&["sh", "-c", "echo oops >&2; exit 3"]).await;
    assert!(!result.success);
    assert_eq!(result.exit_code, Some(3));
    assert_eq!(result.stderr, "oops\n");
    assert_eq!(result.error, None);
    assert_eq!(result.outcome(), Outcome::Exited(3));
}

#[tokio::test]
async fn false_exits_one() {
    let result = run(&["false"]).await;
    assert!(!result.success);
    assert_eq!(result.exit_code, Some(1));
}

// ---------------------------------------------------------------------------
// Output capture
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stdout_is_captured_verbatim() {
    let result = run(&["printf", "line one\nline two\n"]).await;
    assert!(result.success);
    assert_eq!(result.stdout, "line one\nline two\n");
}

#[tokio::test]
async fn stdout_and_stderr_are_separate() {
    let result = run(&["sh", "-c", "echo out; echo err >&2"]).await;
    assert_eq!(result.stdout, "out\n");
    assert_eq!(result.stderr, "err\n");
}

#[tokio::test]
async fn invalid_utf8_is_decoded_lossily() {
    let result = run(&["printf", "\\377ok"]).await;
    assert!(result.success);
    assert_eq!(result.stdout, "\u{FFFD}ok");
}

#[tokio::test]
async fn stdin_is_not_inherited() {
    // `cat` with no stdin reads end-of-file immediately
    let result = run(&["cat"]).await;
    assert!(result.success);
    assert_eq!(result.stdout, "");
}

#[tokio::test]
async fn command_line_is_reconstructed() {
    let result = run(&["echo", "a", "b"]).await;
    assert_eq!(result.command, "echo a b");
}

// ---------------------------------------------------------------------------
// Working directory and environment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn runs_in_given_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    // Canonicalize to resolve symlinks (e.g., /var -> /private/var on macOS)
    let canonical = dir.path().canonicalize().unwrap();

    let result = Executor::new().run(&Invocation::new("pwd"), &canonical).await;

    assert!(result.success);
    assert_eq!(result.stdout.trim(), canonical.to_str().unwrap());
}

#[tokio::test]
async fn env_passes_variable_to_process() {
    let executor = Executor::new().env("CMDKIT_TEST_VAR", "test_value");
    let result = run_with(&executor, &["printenv", "CMDKIT_TEST_VAR"]).await;
    assert!(result.success);
    assert_eq!(result.stdout, "test_value\n");
}

#[tokio::test]
async fn envs_passes_multiple_variables() {
    let executor = Executor::new().envs([("VAR_A", "alpha"), ("VAR_B", "beta")]);
    let result = run_with(&executor, &["sh", "-c", "echo $VAR_A $VAR_B"]).await;
    assert_eq!(result.stdout, "alpha beta\n");
}

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
struct Capture(std::sync::Arc<parking_lot::Mutex<Vec<u8>>>);

impl std::io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn command_span_records_exit_code() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_env_filter(tracing_subscriber::EnvFilter::new("cmdkit_shell=debug"))
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let result = run(&["sh", "-c", "exit 4"]).await;

    assert_eq!(result.exit_code, Some(4));
    let logs = String::from_utf8(capture.0.lock().clone()).unwrap();
    assert!(logs.contains("cmdkit.cmd"), "{logs}");
    assert!(logs.contains("exit_code=4"), "{logs}");
    assert!(logs.contains("command exited non-zero"), "{logs}");
}
