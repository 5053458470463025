// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cmdkit-core: typed argument-vector builders and the uniform result record
//! for the cmdkit toolkit.
//!
//! Everything in this crate is pure. Builders map typed options to an
//! [`Invocation`]; the `cmdkit-shell` crate runs invocations and produces
//! [`ExecutionResult`]s.

pub mod files;
pub mod invocation;
pub mod options;
pub mod process;
pub mod result;
pub mod search;
pub mod user;

pub use files::{
    change_mode, change_owner, list_directory, make_directory, remove, touch_file,
    working_directory, ChmodOptions, ChownOptions, ListOptions, MkdirOptions, RemoveOptions,
    TouchOptions,
};
pub use invocation::Invocation;
pub use options::{FileType, ParseOptionError, SortKey, TopSort};
pub use process::{
    list_processes, live_snapshot, memory_summary, send_signal, PsOptions, TopOptions,
    DEFAULT_SIGNAL,
};
pub use result::{ExecutionResult, Outcome, Summary};
pub use search::{find_files, pattern_search, FindOptions, GrepOptions, MATCH_ALL};
pub use user::current_user;
