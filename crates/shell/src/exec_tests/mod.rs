// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the single-invocation executor.

use super::*;

mod basic;
mod errors;
mod timeout;

/// Run `argv` with a default executor in the process working directory.
pub(crate) async fn run(argv: &[&str]) -> ExecutionResult {
    run_with(&Executor::new(), argv).await
}

pub(crate) async fn run_with(executor: &Executor, argv: &[&str]) -> ExecutionResult {
    let cwd = std::env::current_dir().unwrap();
    executor.run(&Invocation::from_argv(argv.iter().copied()), &cwd).await
}
