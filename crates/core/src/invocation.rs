// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation requests: a program name followed by its arguments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An argument vector for one external program.
///
/// Builders never push empty strings: an empty argument or flag value is
/// dropped at construction, so every element of a built vector is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    argv: Vec<String>,
}

impl Invocation {
    /// Start an invocation of `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self { argv: vec![program.into()] }
    }

    /// Wrap a raw argument vector as-is.
    ///
    /// Unlike the builder methods this keeps empty elements, so callers
    /// running arbitrary commands get exactly what they passed.
    pub fn from_argv<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { argv: argv.into_iter().map(Into::into).collect() }
    }

    /// Append an argument, skipping it when empty.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        let arg = arg.into();
        if !arg.is_empty() {
            self.argv.push(arg);
        }
        self
    }

    /// Append every non-empty argument.
    pub fn args<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        args.into_iter().fold(self, |invocation, arg| invocation.arg(arg))
    }

    /// Append `flag` when `enabled` is set.
    pub fn flag(self, enabled: bool, flag: &str) -> Self {
        if enabled {
            self.arg(flag)
        } else {
            self
        }
    }

    /// Append `flag` followed by `value` when a non-empty value is present.
    pub fn option<S: Into<String>>(self, flag: &str, value: Option<S>) -> Self {
        match value.map(Into::into) {
            Some(value) if !value.is_empty() => self.arg(flag).arg(value),
            _ => self,
        }
    }

    /// The program name (`argv[0]`), or `""` for an empty raw vector.
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or("")
    }

    /// Arguments after the program name.
    pub fn arguments(&self) -> &[String] {
        self.argv.get(1..).unwrap_or(&[])
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn into_argv(self) -> Vec<String> {
        self.argv
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty() || self.program().is_empty()
    }

    /// The argument vector joined by single spaces, as recorded in results.
    pub fn command_line(&self) -> String {
        self.argv.join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

impl PartialEq<[&str]> for Invocation {
    fn eq(&self, other: &[&str]) -> bool {
        self.argv.len() == other.len() && self.argv.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Invocation {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
