// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Enumerated option values shared by the builders.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// An option value that is not one of the recognized names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {option} `{value}` (expected one of: {expected})")]
pub struct ParseOptionError {
    pub option: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Sort order for directory listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Size,
    Time,
}

impl SortKey {
    pub fn flag(self) -> &'static str {
        match self {
            SortKey::Name => "-X",
            SortKey::Size => "-S",
            SortKey::Time => "-t",
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "size" => Ok(SortKey::Size),
            "time" => Ok(SortKey::Time),
            other => Err(ParseOptionError {
                option: "sort key",
                value: other.to_string(),
                expected: "name, size, time",
            }),
        }
    }
}

/// Sort field for `top` snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopSort {
    Cpu,
    Mem,
}

impl TopSort {
    pub fn field(self) -> &'static str {
        match self {
            TopSort::Cpu => "%CPU",
            TopSort::Mem => "%MEM",
        }
    }
}

impl FromStr for TopSort {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpu" => Ok(TopSort::Cpu),
            "mem" => Ok(TopSort::Mem),
            other => Err(ParseOptionError {
                option: "top sort field",
                value: other.to_string(),
                expected: "cpu, mem",
            }),
        }
    }
}

/// File type predicate for `find -type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Directory,
    Symlink,
    Pipe,
    Socket,
    Block,
    Char,
}

impl FileType {
    /// The single-letter code `find` expects.
    pub fn code(self) -> &'static str {
        match self {
            FileType::File => "f",
            FileType::Directory => "d",
            FileType::Symlink => "l",
            FileType::Pipe => "p",
            FileType::Socket => "s",
            FileType::Block => "b",
            FileType::Char => "c",
        }
    }
}

impl FromStr for FileType {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" | "file" => Ok(FileType::File),
            "d" | "dir" | "directory" => Ok(FileType::Directory),
            "l" | "link" | "symlink" => Ok(FileType::Symlink),
            "p" | "pipe" => Ok(FileType::Pipe),
            "s" | "socket" => Ok(FileType::Socket),
            "b" | "block" => Ok(FileType::Block),
            "c" | "char" => Ok(FileType::Char),
            other => Err(ParseOptionError {
                option: "file type",
                value: other.to_string(),
                expected: "f, d, l, p, s, b, c",
            }),
        }
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
