// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for process and memory operations.

use std::os::unix::process::ExitStatusExt;

use super::toolkit_in_tempdir;
use cmdkit_core::{PsOptions, TopOptions, TopSort};

#[tokio::test]
async fn send_signal_kills_target() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    let mut target = std::process::Command::new("sleep").arg("30").spawn().unwrap();

    let result = toolkit.send_signal(target.id(), Some("KILL")).await;
    if !result.ran() {
        // kill(1) is not installed here
        target.kill().unwrap();
        target.wait().unwrap();
        return;
    }

    assert!(result.success, "{result:?}");
    assert_eq!(result.command, format!("kill -KILL {}", target.id()));
    let status = target.wait().unwrap();
    assert_eq!(status.signal(), Some(9));
}

#[tokio::test]
async fn send_signal_defaults_to_term() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    let mut target = std::process::Command::new("sleep").arg("30").spawn().unwrap();

    let result = toolkit.send_signal(target.id(), None).await;
    if !result.ran() {
        target.kill().unwrap();
        target.wait().unwrap();
        return;
    }

    assert!(result.success, "{result:?}");
    assert!(result.command.starts_with("kill -TERM "));
    let status = target.wait().unwrap();
    assert_eq!(status.signal(), Some(15));
}

#[tokio::test]
async fn send_signal_to_missing_pid_fails() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    let mut target = std::process::Command::new("true").spawn().unwrap();
    let pid = target.id();
    target.wait().unwrap();

    let result = toolkit.send_signal(pid, Some("TERM")).await;

    assert!(!result.success);
}

#[tokio::test]
async fn list_processes_records_invocation() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    let opts = PsOptions {
        show_all: true,
        filter: None,
        fields: vec!["pid".to_string(), "comm".to_string()],
    };

    let result = toolkit.list_processes(&opts).await;

    assert_eq!(result.command, "ps -e -o pid,comm");
    // ps may be missing in minimal environments; either way one entry
    if result.success {
        assert!(!result.stdout.is_empty());
    }
    assert_eq!(toolkit.history_len(), 1);
}

#[tokio::test]
async fn live_snapshot_records_invocation() {
    let (_dir, toolkit) = toolkit_in_tempdir();
    let opts = TopOptions { sort: Some(TopSort::Mem), ..TopOptions::default() };

    let result = toolkit.live_snapshot(&opts).await;

    assert_eq!(result.command, "top -b -n 1 -o %MEM");
    assert_eq!(toolkit.history_len(), 1);
}

#[tokio::test]
async fn memory_summary_records_invocation() {
    let (_dir, toolkit) = toolkit_in_tempdir();

    let result = toolkit.memory_summary(true).await;

    assert_eq!(result.command, "free -h");
    assert_eq!(toolkit.history_len(), 1);
}
