// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the toolkit facade against the real system utilities.

use super::*;

mod directory;
mod files;
mod history;
mod processes;
mod search;

/// A toolkit rooted in a fresh temporary directory.
///
/// The `TempDir` must outlive the toolkit.
pub(crate) fn toolkit_in_tempdir() -> (tempfile::TempDir, Toolkit) {
    let dir = tempfile::tempdir().unwrap();
    // Canonicalize to resolve symlinks (e.g., /var -> /private/var on macOS)
    let root = dir.path().canonicalize().unwrap();
    let toolkit = Toolkit::with_config(ToolkitConfig { cwd: Some(root), ..ToolkitConfig::default() });
    (dir, toolkit)
}
