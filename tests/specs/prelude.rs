// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for the specs.

pub use cmdkit_core::*;
pub use cmdkit_shell::{Toolkit, ToolkitConfig};
pub use similar_asserts::assert_eq;

use std::path::PathBuf;

/// A scratch directory and a toolkit rooted in it.
pub struct Sandbox {
    _dir: tempfile::TempDir,
    pub root: PathBuf,
    pub toolkit: Toolkit,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let toolkit =
            Toolkit::with_config(ToolkitConfig { cwd: Some(root.clone()), ..Default::default() });
        Self { _dir: dir, root, toolkit }
    }

    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }
}

/// Owned argv for comparing against a built invocation.
pub fn argv(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
