// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the shell crate.

use std::time::Duration;

/// Overrides the configured child timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "CMDKIT_TIMEOUT_MS";

/// Child timeout override from `CMDKIT_TIMEOUT_MS`. Zero and unparsable
/// values are ignored.
pub fn timeout_override() -> Option<Duration> {
    std::env::var(TIMEOUT_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}
