//! Documented argument vectors for every builder.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn make_directory_with_parents_and_mode() {
    let opts = MkdirOptions { parents: true, mode: Some(0o755), ..Default::default() };
    assert_eq!(make_directory("foo", &opts).into_argv(), argv(&["mkdir", "-p", "-m755", "foo"]));
}

#[test]
fn remove_recursive_force() {
    let opts = RemoveOptions { recursive: true, force: true, ..Default::default() };
    assert_eq!(remove(&["a", "b"], &opts).into_argv(), argv(&["rm", "-r", "-f", "a", "b"]));
}

#[test]
fn send_kill_signal() {
    assert_eq!(send_signal(1234, Some("KILL")).into_argv(), argv(&["kill", "-KILL", "1234"]));
}

#[test]
fn every_builder_starts_with_its_program() {
    let built = [
        (current_user(), "whoami"),
        (list_directory(".", &ListOptions::default()), "ls"),
        (working_directory(), "pwd"),
        (make_directory("d", &MkdirOptions::default()), "mkdir"),
        (touch_file("f", &TouchOptions::default()), "touch"),
        (remove(&["f"], &RemoveOptions::default()), "rm"),
        (change_mode("644", "f", &ChmodOptions::default()), "chmod"),
        (change_owner("root", "f", &ChownOptions::default()), "chown"),
        (list_processes(&PsOptions::default()), "ps"),
        (send_signal(1, None), "kill"),
        (live_snapshot(&TopOptions::default()), "top"),
        (memory_summary(false), "free"),
        (pattern_search("x", ".", &GrepOptions::default()), "grep"),
        (find_files(".", &FindOptions::default()), "find"),
    ];
    for (invocation, program) in built {
        assert_eq!(invocation.program(), program);
        assert!(invocation.argv().iter().all(|a| !a.is_empty()), "{invocation}");
    }
}
