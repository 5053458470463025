// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builders for directory and file utilities: `ls`, `pwd`, `mkdir`, `touch`,
//! `rm`, `chmod`, `chown`.
//!
//! Flags are emitted in a fixed order, then positionals.

use crate::options::SortKey;
use crate::Invocation;

/// Options for [`list_directory`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// `-l`
    pub long: bool,
    /// `-a`
    pub all: bool,
    pub sort: Option<SortKey>,
}

/// `ls [-l] [-a] [-X|-S|-t] <path>`; an empty path lists `.`.
pub fn list_directory(path: &str, opts: &ListOptions) -> Invocation {
    let path = if path.is_empty() { "." } else { path };
    Invocation::new("ls")
        .flag(opts.long, "-l")
        .flag(opts.all, "-a")
        .arg(opts.sort.map(SortKey::flag).unwrap_or_default())
        .arg(path)
}

/// `pwd`
pub fn working_directory() -> Invocation {
    Invocation::new("pwd")
}

/// Options for [`make_directory`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MkdirOptions {
    /// `-p`
    pub parents: bool,
    /// `-v`
    pub verbose: bool,
    /// Permission bits, rendered in octal as `-m<mode>`.
    pub mode: Option<u32>,
}

/// `mkdir [-p] [-v] [-m<octal>] <name>`
pub fn make_directory(name: &str, opts: &MkdirOptions) -> Invocation {
    Invocation::new("mkdir")
        .flag(opts.parents, "-p")
        .flag(opts.verbose, "-v")
        .arg(opts.mode.map(|mode| format!("-m{mode:o}")).unwrap_or_default())
        .arg(name)
}

/// Options for [`touch_file`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchOptions {
    /// `-c`
    pub create_new: bool,
    /// `-v`
    pub verbose: bool,
}

/// `touch [-c] [-v] <name>`
pub fn touch_file(name: &str, opts: &TouchOptions) -> Invocation {
    Invocation::new("touch").flag(opts.create_new, "-c").flag(opts.verbose, "-v").arg(name)
}

/// Options for [`remove`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    /// `-r`
    pub recursive: bool,
    /// `-f`
    pub force: bool,
    /// `-i`; the child has no stdin, so every prompt reads end-of-file.
    pub interactive: bool,
    /// `-v`
    pub verbose: bool,
    /// `-d`
    pub dir: bool,
}

/// `rm [-r] [-f] [-i] [-v] [-d] <paths...>`
pub fn remove<S: AsRef<str>>(paths: &[S], opts: &RemoveOptions) -> Invocation {
    Invocation::new("rm")
        .flag(opts.recursive, "-r")
        .flag(opts.force, "-f")
        .flag(opts.interactive, "-i")
        .flag(opts.verbose, "-v")
        .flag(opts.dir, "-d")
        .args(paths.iter().map(|path| AsRef::<str>::as_ref(path)))
}

/// Options for [`change_mode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChmodOptions {
    /// `-r`
    pub recursive: bool,
    /// `-v`
    pub verbose: bool,
}

/// `chmod [-r] [-v] <mode> <path>`
pub fn change_mode(mode: &str, path: &str, opts: &ChmodOptions) -> Invocation {
    Invocation::new("chmod")
        .flag(opts.recursive, "-r")
        .flag(opts.verbose, "-v")
        .arg(mode)
        .arg(path)
}

/// Options for [`change_owner`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChownOptions {
    /// Appended to the owner as `owner:group`.
    pub group: Option<String>,
    /// `-R`
    pub recursive: bool,
}

/// `chown [-R] <owner[:group]> <path>`
pub fn change_owner(owner: &str, path: &str, opts: &ChownOptions) -> Invocation {
    let ownership = match opts.group.as_deref() {
        Some(group) if !group.is_empty() => format!("{owner}:{group}"),
        _ => owner.to_string(),
    };
    Invocation::new("chown").flag(opts.recursive, "-R").arg(ownership).arg(path)
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
