// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only call history.

use cmdkit_core::ExecutionResult;
use parking_lot::Mutex;

/// Every result a toolkit produced, in invocation order.
///
/// Appends are lock-guarded so a toolkit can be shared by reference. There
/// is no eviction and no size bound.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<ExecutionResult>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `result` and hand the original back.
    pub fn record(&self, result: ExecutionResult) -> ExecutionResult {
        self.entries.lock().push(result.clone());
        result
    }

    /// Copy of every entry recorded so far.
    pub fn snapshot(&self) -> Vec<ExecutionResult> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Serialize the history as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&*self.entries.lock())
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
