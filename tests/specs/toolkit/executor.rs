//! Uniform result contract of the executor.

use std::time::{Duration, Instant};

use crate::prelude::*;
use crate::prelude::assert_eq;

#[tokio::test]
async fn zero_exit_succeeds_with_empty_stderr() {
    let sandbox = Sandbox::new();
    let result = sandbox.toolkit.execute(["true"]).await;
    assert!(result.success);
    assert_eq!(result.exit_code, Some(0));
    assert_eq!(result.stderr, "");
}

#[tokio::test]
async fn non_zero_exit_keeps_exact_code_and_stderr() {
    let sandbox = Sandbox::new();
    let result = sandbox.toolkit.execute(["ls", "definitely-missing"]).await;
    assert!(!result.success);
    assert!(matches!(result.exit_code, Some(code) if code != 0));
    assert!(result.stderr.contains("definitely-missing"), "{}", result.stderr);
}

#[tokio::test]
async fn missing_executable_has_no_exit_code() {
    let sandbox = Sandbox::new();
    let result = sandbox.toolkit.execute(["cmdkit-no-such-binary"]).await;
    assert!(!result.success);
    assert_eq!(result.exit_code, None);
    assert!(result.error.is_some());
}

#[tokio::test]
#[serial_test::serial]
async fn timeout_from_environment_bounds_the_wait() {
    std::env::set_var("CMDKIT_TIMEOUT_MS", "300");
    let toolkit = Toolkit::new();
    std::env::remove_var("CMDKIT_TIMEOUT_MS");

    let start = Instant::now();
    let result = toolkit.execute(["sleep", "10"]).await;

    assert!(!result.success);
    assert_eq!(result.exit_code, None);
    assert!(result.error.as_deref().unwrap().contains("timed out"));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
#[ignore = "waits out the full 30-second ceiling"]
async fn default_ceiling_is_thirty_seconds() {
    let sandbox = Sandbox::new();
    let start = Instant::now();

    let result = sandbox.toolkit.execute(["sleep", "45"]).await;

    let elapsed = start.elapsed();
    assert_eq!(result.exit_code, None);
    assert!(result.error.as_deref().unwrap().contains("30 seconds"));
    assert!(elapsed >= Duration::from_secs(30) && elapsed < Duration::from_secs(40), "{elapsed:?}");
}
