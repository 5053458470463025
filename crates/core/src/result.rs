// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The uniform result record produced for every toolkit operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized outcome of one invocation.
///
/// A result either carries an exit code (the program ran to completion,
/// successfully or not) or an error description (the program could not be
/// run, timed out, or the in-process operation failed). Never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// The argument vector joined by spaces.
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    /// True iff `exit_code == Some(0)`, or an in-process operation succeeded.
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

/// A single normalized value extracted from otherwise raw output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_directory: Option<String>,
}

impl Summary {
    pub fn username(name: impl Into<String>) -> Self {
        Self { username: Some(name.into()), ..Self::default() }
    }

    pub fn current_directory(dir: impl Into<String>) -> Self {
        Self { current_directory: Some(dir.into()), ..Self::default() }
    }
}

/// Failure category of a result, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit code zero.
    Succeeded,
    /// The program ran and reported failure.
    Exited(i32),
    /// The program could not be run, or was stopped before it exited.
    Failed,
}

impl ExecutionResult {
    /// A program that ran to completion with `exit_code`.
    pub fn completed(
        command: impl Into<String>,
        exit_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            exit_code: Some(exit_code),
            stdout: stdout.into(),
            stderr: stderr.into(),
            success: exit_code == 0,
            error: None,
            summary: None,
        }
    }

    /// An invocation that produced no exit code.
    pub fn failed(command: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            command: command.into(),
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            success: false,
            error: Some(error.to_string()),
            summary: None,
        }
    }

    /// A successful in-process operation (no child was spawned).
    pub fn in_process(command: impl Into<String>, summary: Summary) -> Self {
        Self {
            command: command.into(),
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            success: true,
            error: None,
            summary: Some(summary),
        }
    }

    /// Attach output captured before the child stopped without an exit code.
    pub fn with_output(mut self, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self.stderr = stderr.into();
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Whether an external program ran to completion.
    pub fn ran(&self) -> bool {
        self.exit_code.is_some()
    }

    pub fn outcome(&self) -> Outcome {
        match self.exit_code {
            Some(0) => Outcome::Succeeded,
            Some(code) => Outcome::Exited(code),
            None if self.success => Outcome::Succeeded,
            None => Outcome::Failed,
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
