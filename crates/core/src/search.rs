// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builders for search utilities: `grep` and `find`.

use crate::options::FileType;
use crate::Invocation;

/// Options for [`pattern_search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrepOptions {
    /// `-i`
    pub ignore_case: bool,
    /// `-r`
    pub recursive: bool,
}

/// Matches every line, like an empty pattern.
pub const MATCH_ALL: &str = "^";

/// `grep [-i] [-r] <pattern> <path>`
///
/// An empty pattern is sent as [`MATCH_ALL`] so that `path` keeps its
/// position instead of being read as the pattern.
pub fn pattern_search(pattern: &str, path: &str, opts: &GrepOptions) -> Invocation {
    let pattern = if pattern.is_empty() { MATCH_ALL } else { pattern };
    Invocation::new("grep")
        .flag(opts.ignore_case, "-i")
        .flag(opts.recursive, "-r")
        .arg(pattern)
        .arg(path)
}

/// Options for [`find_files`].
///
/// Sizes use `find` syntax without the sign, e.g. `"10k"` or `"2M"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// `-name <pattern>`
    pub name: Option<String>,
    /// `-type <code>`
    pub file_type: Option<FileType>,
    /// `-size +N`
    pub min_size: Option<String>,
    /// `-size -N`
    pub max_size: Option<String>,
    /// `-maxdepth <N>`
    pub max_depth: Option<u32>,
}

/// `find <start> [-name <pattern>] [-type <t>] [-size +N] [-size -N] [-maxdepth <N>]`
pub fn find_files(start: &str, opts: &FindOptions) -> Invocation {
    let signed = |sign: char, size: &Option<String>| {
        size.as_deref().filter(|s| !s.is_empty()).map(|s| format!("{sign}{s}"))
    };
    Invocation::new("find")
        .arg(start)
        .option("-name", opts.name.as_deref())
        .option("-type", opts.file_type.map(FileType::code))
        .option("-size", signed('+', &opts.min_size))
        .option("-size", signed('-', &opts.max_size))
        .option("-maxdepth", opts.max_depth.map(|d| d.to_string()))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
