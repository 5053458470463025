// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_history_is_empty() {
    let history = History::new();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
    assert!(history.snapshot().is_empty());
}

#[test]
fn record_returns_the_result_unchanged() {
    let history = History::new();
    let result = ExecutionResult::completed("true", 0, "", "");
    let returned = history.record(result.clone());
    assert_eq!(returned, result);
    assert_eq!(history.snapshot(), vec![result]);
}

#[test]
fn record_keeps_invocation_order_including_failures() {
    let history = History::new();
    history.record(ExecutionResult::completed("a", 0, "", ""));
    history.record(ExecutionResult::failed("b", "spawn failed"));
    history.record(ExecutionResult::completed("c", 1, "", "boom"));

    let commands: Vec<String> = history.snapshot().into_iter().map(|r| r.command).collect();
    assert_eq!(commands, ["a", "b", "c"]);
    assert_eq!(history.len(), 3);
}

#[test]
fn to_json_serializes_every_entry() {
    let history = History::new();
    history.record(ExecutionResult::completed("whoami", 0, "root\n", ""));
    history.record(ExecutionResult::failed("nope", "not found"));

    let json = history.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["exit_code"], 0);
    assert_eq!(entries[1]["error"], "not found");
}

#[test]
fn shared_history_accepts_concurrent_appends() {
    let history = std::sync::Arc::new(History::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let history = std::sync::Arc::clone(&history);
            std::thread::spawn(move || {
                for j in 0..25 {
                    history.record(ExecutionResult::completed(format!("{i}-{j}"), 0, "", ""));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(history.len(), 100);
}
