// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the bounded wait.

use std::time::{Duration, Instant};

use super::run_with;
use crate::exec::error::format_timeout;
use crate::exec::{ExecError, Executor, DEFAULT_TIMEOUT};

#[test]
fn default_timeout_is_thirty_seconds() {
    assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
    assert_eq!(Executor::new().timeout_limit(), DEFAULT_TIMEOUT);
}

#[yare::parameterized(
    thirty_seconds = { Duration::from_secs(30),    "30 seconds" },
    one_second     = { Duration::from_secs(1),     "1 second" },
    millis         = { Duration::from_millis(250), "250 ms" },
    mixed          = { Duration::from_millis(1500), "1500 ms" },
)]
fn timeout_rendering(timeout: Duration, expected: &str) {
    assert_eq!(format_timeout(&timeout), expected);
}

#[test]
fn timed_out_message_mentions_limit() {
    let err = ExecError::TimedOut { command: "sleep 60".to_string(), timeout: DEFAULT_TIMEOUT };
    assert_eq!(err.to_string(), "command `sleep 60` timed out (>30 seconds)");
}

#[tokio::test]
async fn slow_child_is_killed_at_the_limit() {
    let executor = Executor::new().timeout(Duration::from_millis(200));
    let start = Instant::now();

    let result = run_with(&executor, &["sleep", "10"]).await;

    let elapsed = start.elapsed();
    assert!(!result.success);
    assert_eq!(result.exit_code, None);
    let error = result.error.unwrap();
    assert!(error.contains("timed out"), "error = {error}");
    assert!(elapsed >= Duration::from_millis(200), "returned early: {elapsed:?}");
    assert!(elapsed < Duration::from_secs(5), "not bounded: {elapsed:?}");
}

#[tokio::test]
async fn fast_child_finishes_within_limit() {
    let executor = Executor::new().timeout(Duration::from_secs(5));
    let result = run_with(&executor, &["echo", "quick"]).await;
    assert!(result.success);
    assert_eq!(result.stdout, "quick\n");
}
