// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Toolkit configuration loaded from TOML.
//!
//! ```toml
//! timeout_ms = 10000
//! cwd = "/srv/app"
//!
//! [env]
//! LC_ALL = "C"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::exec::DEFAULT_TIMEOUT;

/// Errors loading a [`ToolkitConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("timeout_ms must be greater than zero")]
    InvalidTimeout,
}

/// Settings applied to every invocation a toolkit runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolkitConfig {
    /// How long a child may run before it is killed.
    pub timeout_ms: u64,
    /// Starting working directory. Defaults to the process working directory.
    pub cwd: Option<PathBuf>,
    /// Extra environment variables for every child.
    pub env: BTreeMap<String, String>,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self { timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64, cwd: None, env: BTreeMap::new() }
    }
}

impl ToolkitConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }

    /// Apply overrides from the environment (see [`crate::env`]).
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(timeout) = crate::env::timeout_override() {
            self.timeout_ms = timeout.as_millis() as u64;
        }
        self
    }

    /// The child timeout; a zero value falls back to the default.
    pub fn timeout(&self) -> Duration {
        match self.timeout_ms {
            0 => DEFAULT_TIMEOUT,
            ms => Duration::from_millis(ms),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
