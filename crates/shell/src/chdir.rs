// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target resolution for the in-process change-directory operation.

use std::io;
use std::path::{Path, PathBuf};

/// Errors resolving or entering a change-directory target.
#[derive(Debug, thiserror::Error)]
pub enum ChdirError {
    #[error("cannot resolve home directory")]
    NoHome,

    #[error("cannot change directory to {}: {source}", .path.display())]
    Resolve { path: PathBuf, source: io::Error },

    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },
}

/// Resolve `target` against `cwd`.
///
/// - absent, empty or `~`: the home directory
/// - `.`: `cwd`, canonicalized
/// - `..`: the parent of the canonical `cwd` (the root stays the root)
/// - `~/rest`: `rest` under the home directory
/// - anything else: joined onto `cwd` and canonicalized
///
/// The result must be an existing directory.
pub(crate) fn resolve(cwd: &Path, target: Option<&str>) -> Result<PathBuf, ChdirError> {
    let resolved = match target.map(str::trim).filter(|t| !t.is_empty()) {
        None | Some("~") => home()?,
        Some(".") => canonical(cwd)?,
        Some("..") => {
            let here = canonical(cwd)?;
            here.parent().map(Path::to_path_buf).unwrap_or(here)
        }
        Some(target) => canonical(&cwd.join(expand_tilde(target)?))?,
    };
    ensure_directory(resolved)
}

fn canonical(path: &Path) -> Result<PathBuf, ChdirError> {
    path.canonicalize().map_err(|source| ChdirError::Resolve { path: path.to_path_buf(), source })
}

fn home() -> Result<PathBuf, ChdirError> {
    dirs::home_dir().ok_or(ChdirError::NoHome)
}

fn expand_tilde(target: &str) -> Result<PathBuf, ChdirError> {
    match target.strip_prefix("~/") {
        Some(rest) => Ok(home()?.join(rest)),
        None => Ok(PathBuf::from(target)),
    }
}

fn ensure_directory(path: PathBuf) -> Result<PathBuf, ChdirError> {
    match std::fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => Ok(path),
        Ok(_) => Err(ChdirError::NotADirectory { path }),
        Err(source) => Err(ChdirError::Resolve { path, source }),
    }
}

#[cfg(test)]
#[path = "chdir_tests.rs"]
mod tests;
