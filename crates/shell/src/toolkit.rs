// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The toolkit facade: one method per wrapped utility.

use std::path::{Path, PathBuf};
use std::time::Duration;

use cmdkit_core::{
    files, process, search, user, ChmodOptions, ChownOptions, ExecutionResult, FindOptions,
    GrepOptions, Invocation, ListOptions, MkdirOptions, PsOptions, RemoveOptions, Summary,
    TopOptions, TouchOptions,
};

use crate::chdir;
use crate::config::ToolkitConfig;
use crate::exec::Executor;
use crate::history::History;

/// Runs wrapped utilities in its own working directory and records every
/// result in its [`History`].
///
/// The working directory belongs to the toolkit: [`change_directory`] moves
/// it and every child is spawned there. The process working directory is
/// never touched.
///
/// [`change_directory`]: Toolkit::change_directory
#[derive(Debug)]
pub struct Toolkit {
    executor: Executor,
    history: History,
    cwd: PathBuf,
}

impl Toolkit {
    /// Default configuration plus environment overrides, starting in the
    /// process working directory.
    pub fn new() -> Self {
        Self::with_config(ToolkitConfig::default().with_env_overrides())
    }

    pub fn with_config(config: ToolkitConfig) -> Self {
        let timeout = config.timeout();
        let cwd = config.cwd.unwrap_or_else(process_cwd);
        Self {
            executor: Executor::new().timeout(timeout).envs(config.env),
            history: History::new(),
            cwd: absolutize(cwd),
        }
    }

    /// Set the working directory children are spawned in. A relative path
    /// is taken against the process working directory.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = absolutize(dir.into());
        self
    }

    /// Set how long a child may run before it is killed.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.executor = self.executor.timeout(timeout);
        self
    }

    /// Set an environment variable on every child.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.executor = self.executor.env(key, value);
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.cwd
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Copy of every result produced so far, in invocation order.
    pub fn history(&self) -> Vec<ExecutionResult> {
        self.history.snapshot()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_json(&self) -> Result<String, serde_json::Error> {
        self.history.to_json()
    }

    /// Run an arbitrary argument vector.
    pub async fn execute<I, S>(&self, argv: I) -> ExecutionResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dispatch(Invocation::from_argv(argv)).await
    }

    async fn dispatch(&self, invocation: Invocation) -> ExecutionResult {
        self.history.record(self.executor.run(&invocation, &self.cwd).await)
    }

    /// Like `dispatch`, attaching a summary built from trimmed stdout when
    /// the command succeeds. The summary is part of the recorded entry.
    async fn dispatch_summarized(
        &self,
        invocation: Invocation,
        summarize: impl FnOnce(String) -> Summary,
    ) -> ExecutionResult {
        let mut result = self.executor.run(&invocation, &self.cwd).await;
        if result.success {
            let summary = summarize(result.stdout.trim().to_string());
            result = result.with_summary(summary);
        }
        self.history.record(result)
    }

    // -----------------------------------------------------------------------
    // Identity and location
    // -----------------------------------------------------------------------

    /// `whoami`, with `summary.username` on success.
    pub async fn current_user(&self) -> ExecutionResult {
        self.dispatch_summarized(user::current_user(), Summary::username).await
    }

    /// `pwd`, with `summary.current_directory` on success.
    pub async fn working_directory(&self) -> ExecutionResult {
        self.dispatch_summarized(files::working_directory(), Summary::current_directory).await
    }

    /// Move the toolkit's working directory. Spawns nothing.
    ///
    /// On success the result has no exit code and reports the new absolute
    /// path in `summary.current_directory`. On failure the working directory
    /// is left as it was.
    pub fn change_directory(&mut self, target: Option<&str>) -> ExecutionResult {
        let command = match target {
            Some(target) => format!("cd {target}"),
            None => "cd".to_string(),
        };
        let result = match chdir::resolve(&self.cwd, target) {
            Ok(dir) => {
                tracing::info!(from = %self.cwd.display(), to = %dir.display(), "changed directory");
                let summary = Summary::current_directory(dir.display().to_string());
                self.cwd = dir;
                ExecutionResult::in_process(command, summary)
            }
            Err(err) => {
                tracing::warn!(error = %err, "change directory failed");
                ExecutionResult::failed(command, err)
            }
        };
        self.history.record(result)
    }

    // -----------------------------------------------------------------------
    // Files and directories
    // -----------------------------------------------------------------------

    /// `ls`; an empty path lists the working directory.
    pub async fn list_directory(&self, path: &str, opts: &ListOptions) -> ExecutionResult {
        self.dispatch(files::list_directory(path, opts)).await
    }

    pub async fn make_directory(&self, name: &str, opts: &MkdirOptions) -> ExecutionResult {
        self.dispatch(files::make_directory(name, opts)).await
    }

    pub async fn touch_file(&self, name: &str, opts: &TouchOptions) -> ExecutionResult {
        self.dispatch(files::touch_file(name, opts)).await
    }

    pub async fn remove<S: AsRef<str>>(&self, paths: &[S], opts: &RemoveOptions) -> ExecutionResult {
        self.dispatch(files::remove(paths, opts)).await
    }

    pub async fn change_mode(&self, mode: &str, path: &str, opts: &ChmodOptions) -> ExecutionResult {
        self.dispatch(files::change_mode(mode, path, opts)).await
    }

    pub async fn change_owner(
        &self,
        owner: &str,
        path: &str,
        opts: &ChownOptions,
    ) -> ExecutionResult {
        self.dispatch(files::change_owner(owner, path, opts)).await
    }

    // -----------------------------------------------------------------------
    // Processes and memory
    // -----------------------------------------------------------------------

    pub async fn list_processes(&self, opts: &PsOptions) -> ExecutionResult {
        self.dispatch(process::list_processes(opts)).await
    }

    /// `kill -<signal> <pid>`; `None` sends TERM.
    pub async fn send_signal(&self, pid: u32, signal: Option<&str>) -> ExecutionResult {
        self.dispatch(process::send_signal(pid, signal)).await
    }

    pub async fn live_snapshot(&self, opts: &TopOptions) -> ExecutionResult {
        self.dispatch(process::live_snapshot(opts)).await
    }

    pub async fn memory_summary(&self, human_readable: bool) -> ExecutionResult {
        self.dispatch(process::memory_summary(human_readable)).await
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    pub async fn pattern_search(
        &self,
        pattern: &str,
        path: &str,
        opts: &GrepOptions,
    ) -> ExecutionResult {
        self.dispatch(search::pattern_search(pattern, path, opts)).await
    }

    pub async fn find_files(&self, start: &str, opts: &FindOptions) -> ExecutionResult {
        self.dispatch(search::find_files(start, opts)).await
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new()
    }
}

fn process_cwd() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Anchor `dir` at the process working directory and resolve symlinks.
/// A directory that cannot be canonicalized is kept as joined.
fn absolutize(dir: PathBuf) -> PathBuf {
    let dir = if dir.is_relative() { process_cwd().join(dir) } else { dir };
    dir.canonicalize().unwrap_or(dir)
}

#[cfg(test)]
#[path = "toolkit_tests/mod.rs"]
mod tests;
