// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cmdkit-shell: runs cmdkit invocations as child processes.
//!
//! [`Executor`] spawns one program, bounds the wait, and shapes the outcome
//! into an [`ExecutionResult`]. [`Toolkit`] owns a working directory and a
//! [`History`], and exposes one method per wrapped utility.
//!
//! No operation returns `Err`: every failure is carried in the result.

mod chdir;
mod config;
pub mod env;
mod exec;
mod history;
mod toolkit;

pub use chdir::ChdirError;
pub use config::{ConfigError, ToolkitConfig};
pub use exec::{ExecError, Executor, DEFAULT_TIMEOUT};
pub use history::History;
pub use toolkit::Toolkit;

pub use cmdkit_core::{ExecutionResult, Invocation, Outcome, Summary};
