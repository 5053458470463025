//! End-to-end use of one toolkit across several operations.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[tokio::test]
async fn project_scaffold_search_and_cleanup() {
    let mut sandbox = Sandbox::new();
    sandbox.file("seed/notes.md", "remember the milk\n");
    let toolkit = &mut sandbox.toolkit;

    let mkdir = toolkit
        .make_directory("proj/src", &MkdirOptions { parents: true, ..Default::default() })
        .await;
    assert!(mkdir.success, "{mkdir:?}");

    let cd = toolkit.change_directory(Some("proj"));
    assert!(cd.success, "{cd:?}");
    let here = sandbox.root.join("proj");
    assert_eq!(
        cd.summary.as_ref().and_then(|s| s.current_directory.clone()),
        Some(here.display().to_string())
    );

    assert!(toolkit.touch_file("src/lib.rs", &TouchOptions::default()).await.success);

    let found = toolkit
        .find_files(".", &FindOptions { name: Some("*.rs".into()), ..Default::default() })
        .await;
    assert_eq!(found.stdout, "./src/lib.rs\n");

    assert!(toolkit.change_directory(Some("..")).success);

    let grep = toolkit
        .pattern_search("MILK", "seed", &GrepOptions { ignore_case: true, recursive: true })
        .await;
    assert!(grep.success, "{grep:?}");
    assert!(grep.stdout.contains("remember the milk"));

    let rm = toolkit
        .remove(&["proj"], &RemoveOptions { recursive: true, force: true, ..Default::default() })
        .await;
    assert!(rm.success, "{rm:?}");
    assert!(!sandbox.root.join("proj").exists());

    let history = sandbox.toolkit.history();
    let commands: Vec<&str> = history.iter().map(|r| r.command.as_str()).collect();
    assert_eq!(
        commands,
        vec![
            "mkdir -p proj/src",
            "cd proj",
            "touch src/lib.rs",
            "find . -name *.rs",
            "cd ..",
            "grep -i -r MILK seed",
            "rm -r -f proj",
        ]
    );
}

#[tokio::test]
async fn history_exports_as_json() {
    let sandbox = Sandbox::new();
    sandbox.toolkit.current_user().await;
    sandbox.toolkit.execute(["cmdkit-no-such-binary"]).await;

    let json = sandbox.toolkit.history_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["command"].as_str(), Some("whoami"));
    assert!(entries[1].get("exit_code").is_none());
    assert_eq!(entries[1]["success"].as_bool(), Some(false));
}
