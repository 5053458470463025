// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-invocation executor with a bounded wait.

mod error;
mod run;

pub use error::ExecError;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use cmdkit_core::{ExecutionResult, Invocation};

/// Hard ceiling on how long a child may run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs invocations one at a time and normalizes their outcome.
///
/// The executor holds no history and no working directory; both belong to
/// the caller (see [`Toolkit`](crate::Toolkit)).
#[derive(Debug, Clone)]
pub struct Executor {
    timeout: Duration,
    env: BTreeMap<String, String>,
}

impl Executor {
    pub fn new() -> Self {
        Self { timeout: DEFAULT_TIMEOUT, env: BTreeMap::new() }
    }

    /// Set how long a child may run before it is killed.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set an environment variable on every child.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set several environment variables on every child.
    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env.extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn timeout_limit(&self) -> Duration {
        self.timeout
    }

    /// Run `invocation` in `cwd` and wait for it to finish or time out.
    ///
    /// Never fails: launch errors, timeouts and signals all come back as a
    /// result with `success == false` and no exit code.
    pub async fn run(&self, invocation: &Invocation, cwd: &Path) -> ExecutionResult {
        run::run_invocation(self, invocation, cwd).await
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
