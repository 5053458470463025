// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reasons a child produced no exit code.

use std::time::Duration;

/// Errors that can occur while running a single invocation.
///
/// These never reach callers as `Err`; the executor renders them into
/// [`ExecutionResult::error`](cmdkit_core::ExecutionResult::error).
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The invocation had no program name.
    #[error("empty invocation: no program to run")]
    EmptyInvocation,

    /// Command not found or could not be spawned.
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    /// Collecting the child's output or status failed.
    #[error("failed waiting for `{command}`: {source}")]
    WaitFailed {
        command: String,
        source: std::io::Error,
    },

    /// The child outlived the timeout and was killed.
    #[error("command `{command}` timed out (>{})", format_timeout(.timeout))]
    TimedOut { command: String, timeout: Duration },

    /// The child was terminated by a signal before it could exit.
    #[error("command `{command}` was terminated by {}", describe_signal(.signal))]
    Signaled {
        command: String,
        signal: Option<i32>,
    },
}

/// Render a timeout in whole seconds when possible, milliseconds otherwise.
pub(crate) fn format_timeout(timeout: &Duration) -> String {
    if timeout.subsec_nanos() == 0 {
        match timeout.as_secs() {
            1 => "1 second".to_string(),
            secs => format!("{secs} seconds"),
        }
    } else {
        format!("{} ms", timeout.as_millis())
    }
}

fn describe_signal(signal: &Option<i32>) -> String {
    match signal {
        Some(signal) => format!("signal {signal}"),
        None => "an unknown signal".to_string(),
    }
}
