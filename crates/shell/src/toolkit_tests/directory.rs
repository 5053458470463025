// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for identity, pwd, and the in-process change-directory operation.

use super::{toolkit_in_tempdir, Toolkit};
use cmdkit_core::MkdirOptions;

fn reported_dir(result: &cmdkit_core::ExecutionResult) -> Option<&str> {
    result.summary.as_ref().and_then(|s| s.current_directory.as_deref())
}

#[tokio::test]
async fn current_user_summarizes_trimmed_username() {
    let (_dir, toolkit) = toolkit_in_tempdir();

    let result = toolkit.current_user().await;

    assert!(result.success, "{result:?}");
    let username = result.summary.as_ref().and_then(|s| s.username.clone()).unwrap();
    assert_eq!(username, result.stdout.trim());
    assert!(!username.is_empty());
    // The recorded entry carries the summary too
    assert_eq!(toolkit.history()[0].summary, result.summary);
}

#[tokio::test]
async fn working_directory_reports_toolkit_cwd() {
    let (_dir, toolkit) = toolkit_in_tempdir();

    let result = toolkit.working_directory().await;

    assert!(result.success, "{result:?}");
    assert_eq!(reported_dir(&result), toolkit.working_dir().to_str());
}

#[test]
fn change_directory_without_target_goes_home() {
    let Some(home) = dirs::home_dir().filter(|h| h.is_dir()) else { return };
    let (_dir, mut toolkit) = toolkit_in_tempdir();

    let result = toolkit.change_directory(None);

    assert!(result.success, "{result:?}");
    assert_eq!(result.exit_code, None);
    assert_eq!(result.command, "cd");
    assert_eq!(reported_dir(&result), home.to_str());
    assert_eq!(toolkit.working_dir(), home);
}

#[test]
fn change_directory_dot_is_unchanged() {
    let (_dir, mut toolkit) = toolkit_in_tempdir();
    let before = toolkit.working_dir().to_path_buf();

    let result = toolkit.change_directory(Some("."));

    assert!(result.success);
    assert_eq!(toolkit.working_dir(), before);
    assert_eq!(reported_dir(&result), before.to_str());
}

#[test]
fn change_directory_dot_dot_goes_to_parent() {
    let (_dir, mut toolkit) = toolkit_in_tempdir();
    let root = toolkit.working_dir().to_path_buf();
    std::fs::create_dir(root.join("child")).unwrap();
    assert!(toolkit.change_directory(Some("child")).success);

    let result = toolkit.change_directory(Some(".."));

    assert!(result.success);
    assert_eq!(toolkit.working_dir(), root);
    assert_eq!(reported_dir(&result), root.to_str());
}

#[test]
fn change_directory_failure_keeps_cwd() {
    let (_dir, mut toolkit) = toolkit_in_tempdir();
    let before = toolkit.working_dir().to_path_buf();

    let result = toolkit.change_directory(Some("missing"));

    assert!(!result.success);
    assert_eq!(result.exit_code, None);
    assert_eq!(result.command, "cd missing");
    assert!(result.error.as_deref().unwrap().contains("missing"));
    assert_eq!(result.summary, None);
    assert_eq!(toolkit.working_dir(), before);
}

#[tokio::test]
async fn later_operations_run_in_new_directory() {
    let (_dir, mut toolkit) = toolkit_in_tempdir();
    let root = toolkit.working_dir().to_path_buf();

    assert!(toolkit.make_directory("work", &MkdirOptions::default()).await.success);
    assert!(toolkit.change_directory(Some("work")).success);
    assert!(toolkit.make_directory("inner", &MkdirOptions::default()).await.success);

    assert!(root.join("work/inner").is_dir());
    let pwd = toolkit.working_directory().await;
    assert_eq!(reported_dir(&pwd), root.join("work").to_str());
}

#[test]
fn process_working_directory_is_untouched() {
    let before = std::env::current_dir().unwrap();
    let (_dir, mut toolkit) = toolkit_in_tempdir();

    toolkit.change_directory(Some(".."));

    assert_eq!(std::env::current_dir().unwrap(), before);
}

#[test]
fn relative_starting_directory_reports_absolute_paths() {
    let here = std::env::current_dir().unwrap().canonicalize().unwrap();
    let mut toolkit = Toolkit::new().cwd(".");
    assert_eq!(toolkit.working_dir(), here);

    let dot = toolkit.change_directory(Some("."));
    assert!(dot.success, "{dot:?}");
    assert_eq!(reported_dir(&dot), here.to_str());

    let up = toolkit.change_directory(Some(".."));
    assert!(up.success, "{up:?}");
    let parent = here.parent().unwrap_or(&here);
    assert_eq!(reported_dir(&up), parent.to_str());
    assert_eq!(toolkit.working_dir(), parent);
}
