//! Branch inventory: gathers local, cached and live branch sets and
//! reconciles them into the list of stale local branches.
//!
//! The pipeline is a chain of values, each stage consuming the previous one:
//!
//! ```text
//! collect(git, remote) -> Inventory -> reconcile() -> Reconciliation -> stale_branches()
//! ```
//!
//! Gathering runs git commands strictly one after another, in the order
//! live → local → cached. Whether the remote could be reached is carried by
//! [`LiveBranches`], so the cache fallback cannot be skipped by accident.

mod parse;
mod reconcile;


pub use reconcile::{ComparisonSource, Reconciliation, Warning, reconcile};

use parse::{
    parse_cached_remote_line, parse_live_head_line, parse_local_branch_line, parse_remote_line,
};

use crate::error::{Result, StaleError};
use crate::git::GitRunner;

/// Format string that makes `git branch` print `local@{upstream-ref}`.
pub const LOCAL_BRANCH_FORMAT: &str = "--format=%(refname:short)@{%(upstream)}";

/// Name git uses for a remote's symbolic default branch.
pub const HEAD: &str = "HEAD";

/// A local branch and the branch it tracks on the configured remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranchLink {
    /// Local branch name, e.g. `feature-x`.
    pub local: String,
    /// Short name of the upstream on the remote, e.g. `feature-x`.
    pub remote: String,
}

/// Why live branch data is not available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unreachable {
    /// The configured remote is not one of the repository's remotes.
    RemoteNotConfigured { available: Vec<String> },
    /// `git ls-remote` could not reach the remote.
    NoConnection { reason: String },
}

/// Outcome of querying the remote for its current branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveBranches {
    /// Branch names currently on the remote, in the order git listed them.
    Reachable(Vec<String>),
    /// No live data; comparisons must fall back to the cache.
    Unreachable(Unreachable),
}

impl LiveBranches {
    pub fn no_connection(&self) -> bool {
        matches!(self, LiveBranches::Unreachable(_))
    }
}

/// Everything gathered from git for one remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub remote: String,
    pub live: LiveBranches,
    pub local: Vec<LocalBranchLink>,
    pub cached: Vec<String>,
}

/// Reject an empty remote name before any git command runs.
pub fn validate_remote(remote: &str) -> Result<()> {
    if remote.trim().is_empty() {
        return Err(StaleError::ConfigError(
            "remote name must not be empty (pass --remote <name> or set `remote` in the config file)"
                .to_string(),
        ));
    }
    Ok(())
}

/// Run the full gathering pass.
///
/// # Errors
///
/// * `StaleError::ConfigError` - The remote name is empty; no command is run
/// * `StaleError::GitCommandFailed` - A git command failed for any reason
///   other than the remote being unreachable
pub fn collect(git: &impl GitRunner, remote: &str) -> Result<Inventory> {
    validate_remote(remote)?;

    let live = gather_live_branches(git, remote)?;
    let local = gather_local_branches(git, remote)?;
    let cached = gather_cached_remote_branches(git, remote)?;

    Ok(Inventory {
        remote: remote.to_string(),
        live,
        local,
        cached,
    })
}

/// Query the remote for the branches it currently has.
///
/// A remote missing from `git remote -v`, or an `ls-remote` that exits with
/// code 128, degrades to [`LiveBranches::Unreachable`] instead of failing.
pub fn gather_live_branches(git: &impl GitRunner, remote: &str) -> Result<LiveBranches> {
    validate_remote(remote)?;

    let remotes = list_remotes(git)?;
    if !remotes.iter().any(|r| r == remote) {
        return Ok(LiveBranches::Unreachable(Unreachable::RemoteNotConfigured {
            available: remotes,
        }));
    }

    let output = match git.run(&["ls-remote", "-h", remote]) {
        Ok(output) => output,
        Err(e) if e.is_no_connection() => {
            let reason = match e {
                StaleError::GitCommandFailed { stderr, .. } => stderr,
                other => other.to_string(),
            };
            return Ok(LiveBranches::Unreachable(Unreachable::NoConnection {
                reason,
            }));
        }
        Err(e) => return Err(e),
    };

    let mut branches: Vec<String> = Vec::new();
    for name in output.lines().into_iter().filter_map(parse_live_head_line) {
        if !branches.contains(&name) {
            branches.push(name);
        }
    }

    Ok(LiveBranches::Reachable(branches))
}

/// List local branches that track a branch on `remote`, in git's order.
pub fn gather_local_branches(git: &impl GitRunner, remote: &str) -> Result<Vec<LocalBranchLink>> {
    let output = git.run(&["branch", LOCAL_BRANCH_FORMAT])?;

    Ok(output
        .lines()
        .into_iter()
        .filter_map(|line| parse_local_branch_line(line, remote))
        .collect())
}

/// List the remote-tracking branches of `remote` stored locally.
///
/// `--no-color` keeps `color.ui=always` from wrapping names in escape codes.
pub fn gather_cached_remote_branches(git: &impl GitRunner, remote: &str) -> Result<Vec<String>> {
    let output = git.run(&["branch", "-r", "--no-color"])?;

    Ok(output
        .lines()
        .into_iter()
        .filter_map(|line| parse_cached_remote_line(line, remote))
        .collect())
}

/// Names of the configured remotes, deduplicated, in listing order.
fn list_remotes(git: &impl GitRunner) -> Result<Vec<String>> {
    let output = git.run(&["remote", "-v"])?;

    let mut remotes: Vec<String> = Vec::new();
    for name in output.lines().into_iter().filter_map(parse_remote_line) {
        if !remotes.iter().any(|r| r == name) {
            remotes.push(name.to_string());
        }
    }
    Ok(remotes)
}
