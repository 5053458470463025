// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builders for process and memory utilities: `ps`, `kill`, `top`, `free`.

use crate::options::TopSort;
use crate::Invocation;

/// Signal sent by [`send_signal`] when none is given.
pub const DEFAULT_SIGNAL: &str = "TERM";

/// Options for [`list_processes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PsOptions {
    /// `-e`
    pub show_all: bool,
    /// `-C <name>`
    pub filter: Option<String>,
    /// `-o <csv>`
    pub fields: Vec<String>,
}

/// `ps [-e] [-C <name>] [-o <fields>]`
pub fn list_processes(opts: &PsOptions) -> Invocation {
    let fields: Vec<&str> =
        opts.fields.iter().map(String::as_str).filter(|f| !f.is_empty()).collect();
    let fields = (!fields.is_empty()).then(|| fields.join(","));
    Invocation::new("ps")
        .flag(opts.show_all, "-e")
        .option("-C", opts.filter.as_deref())
        .option("-o", fields)
}

/// `kill -<SIGNAL> <pid>`
///
/// `signal` is a name such as `KILL` or `HUP`; a leading dash is tolerated.
/// A missing or empty signal sends [`DEFAULT_SIGNAL`].
pub fn send_signal(pid: u32, signal: Option<&str>) -> Invocation {
    let signal = signal.map(|s| s.trim().trim_start_matches('-')).filter(|s| !s.is_empty());
    Invocation::new("kill")
        .arg(format!("-{}", signal.unwrap_or(DEFAULT_SIGNAL)))
        .arg(pid.to_string())
}

/// Options for [`live_snapshot`].
///
/// The default runs one batch-mode cycle: without `-b`, `top` wants a
/// terminal, and the toolkit never gives children one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopOptions {
    /// `-b`
    pub batch: bool,
    /// `-n <N>`
    pub cycles: Option<u32>,
    /// `-o %CPU` / `-o %MEM`
    pub sort: Option<TopSort>,
}

impl Default for TopOptions {
    fn default() -> Self {
        Self { batch: true, cycles: Some(1), sort: None }
    }
}

/// `top [-b] [-n <N>] [-o <field>]`
pub fn live_snapshot(opts: &TopOptions) -> Invocation {
    Invocation::new("top")
        .flag(opts.batch, "-b")
        .option("-n", opts.cycles.map(|n| n.to_string()))
        .option("-o", opts.sort.map(TopSort::field))
}

/// `free [-h]`
pub fn memory_summary(human_readable: bool) -> Invocation {
    Invocation::new("free").flag(human_readable, "-h")
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
