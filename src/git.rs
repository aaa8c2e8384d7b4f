//! Git command runner.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling. Every git invocation the tool makes goes through
//! a [`GitRunner`], so the branch logic can be exercised against scripted
//! output in tests.

use crate::error::{Result, StaleError};
use crate::lines::split_lines;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone, Default)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns the non-empty, trimmed stdout lines.
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.stdout)
    }
}

/// Something that can execute git subcommands.
///
/// Implementations block until the command finishes. Callers never run two
/// commands at once.
pub trait GitRunner {
    /// Run `git <args>` and return its output, or
    /// [`StaleError::GitCommandFailed`] on a non-zero exit.
    fn run(&self, args: &[&str]) -> Result<GitOutput>;
}

/// Runs the real `git` binary inside a working tree.
#[derive(Debug, Clone)]
pub struct SystemGit {
    cwd: PathBuf,
}

impl SystemGit {
    pub fn new<P: Into<PathBuf>>(cwd: P) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        run_git(&self.cwd, args)
    }
}

/// Render a git invocation the way a user would type it.
pub fn render_command(args: &[&str]) -> String {
    shell_words::join(std::iter::once("git").chain(args.iter().copied()))
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(StaleError::GitError)` - If git could not be started
/// * `Err(StaleError::GitCommandFailed)` - On non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            StaleError::GitError(format!("failed to execute {}: {}", render_command(args), e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let stderr = if git_output.stderr.is_empty() {
            git_output.stdout
        } else {
            git_output.stderr
        };

        Err(StaleError::GitCommandFailed {
            command: render_command(args),
            exit_code: output.status.code().unwrap_or(-1),
            stderr,
        })
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(StaleError::UserError)` - If not inside a git repository
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();

    match run_git(cwd, &["rev-parse", "--show-toplevel"]) {
        Ok(output) => Ok(PathBuf::from(output.stdout)),
        Err(StaleError::GitError(msg)) => Err(StaleError::UserError(format!(
            "{} (is git installed?)",
            msg
        ))),
        Err(StaleError::GitCommandFailed { stderr, .. })
            if stderr.contains("not a git repository") =>
        {
            Err(StaleError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            ))
        }
        Err(StaleError::GitCommandFailed { stderr, .. }) => Err(StaleError::UserError(
            format!("git command failed: {}", stderr),
        )),
        Err(e) => Err(e),
    }
}
