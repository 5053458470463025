// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawn, bounded wait, and result shaping for one invocation.

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Instant;

use cmdkit_core::{ExecutionResult, Invocation};
use tracing::Instrument;

use super::error::ExecError;
use super::Executor;

/// Output of a child that terminated, on its own or by a signal.
struct Completed {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

pub(super) async fn run_invocation(
    executor: &Executor,
    invocation: &Invocation,
    cwd: &Path,
) -> ExecutionResult {
    let start = Instant::now();
    let command = invocation.command_line();

    let cmd_span = tracing::info_span!(
        "cmdkit.cmd",
        program = %invocation.program(),
        args = ?invocation.arguments(),
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let outcome = spawn_and_wait(executor, invocation, cwd).instrument(cmd_span.clone()).await;
    cmd_span.record("duration_ms", start.elapsed().as_millis() as u64);

    match outcome {
        Ok(Completed { status, stdout, stderr }) => match status.code() {
            Some(exit_code) => {
                cmd_span.record("exit_code", exit_code);
                if exit_code != 0 {
                    tracing::debug!(parent: &cmd_span, exit_code, "command exited non-zero");
                }
                ExecutionResult::completed(command, exit_code, stdout, stderr)
            }
            None => {
                let err = ExecError::Signaled {
                    command: command.clone(),
                    signal: termination_signal(&status),
                };
                tracing::warn!(parent: &cmd_span, error = %err, "command did not complete");
                ExecutionResult::failed(command, err).with_output(stdout, stderr)
            }
        },
        Err(err) => {
            tracing::warn!(parent: &cmd_span, error = %err, "command did not complete");
            ExecutionResult::failed(command, err)
        }
    }
}

/// Spawn the child with no stdin and piped output, then wait for it.
///
/// Output is kept even when the child has no exit code; the caller decides
/// how a signaled child is reported.
///
/// The child is spawned with `kill_on_drop`, so when the timeout elapses
/// and the wait future is dropped, the child is killed and reaped.
async fn spawn_and_wait(
    executor: &Executor,
    invocation: &Invocation,
    cwd: &Path,
) -> Result<Completed, ExecError> {
    if invocation.is_empty() {
        return Err(ExecError::EmptyInvocation);
    }
    let command = invocation.command_line();

    let mut process = tokio::process::Command::new(invocation.program());
    process
        .args(invocation.arguments())
        .current_dir(cwd)
        .envs(&executor.env)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = process
        .spawn()
        .map_err(|source| ExecError::SpawnFailed { command: command.clone(), source })?;

    let output = match tokio::time::timeout(executor.timeout, child.wait_with_output()).await {
        Ok(waited) => {
            waited.map_err(|source| ExecError::WaitFailed { command: command.clone(), source })?
        }
        Err(_elapsed) => {
            return Err(ExecError::TimedOut { command, timeout: executor.timeout });
        }
    };

    Ok(Completed {
        status: output.status,
        stdout: decode(&output.stdout),
        stderr: decode(&output.stderr),
    })
}

/// Lossy UTF-8: invalid sequences become U+FFFD, valid text is untouched.
fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(unix)]
fn termination_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &ExitStatus) -> Option<i32> {
    None
}
