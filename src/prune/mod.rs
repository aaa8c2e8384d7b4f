//! Branch pruner: reports or deletes stale local branches.
//!
//! Deletion is sequential. A branch that cannot be deleted is recorded as
//! broken and the batch moves on to the next one.


use crate::error::{Result, StaleError};
use crate::git::GitRunner;
use serde::Serialize;

/// What to do with the stale branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneMode {
    /// List the branches without touching the repository.
    DryRun,
    /// Delete the branches, with `-D` instead of `-d` when `force` is set.
    Remove { force: bool },
}

impl PruneMode {
    pub fn from_flags(remove: bool, force: bool) -> Self {
        if remove {
            PruneMode::Remove { force }
        } else {
            PruneMode::DryRun
        }
    }

    pub fn is_dry_run(self) -> bool {
        self == PruneMode::DryRun
    }

    pub fn is_forced(self) -> bool {
        matches!(self, PruneMode::Remove { force: true })
    }
}

/// Per-branch progress during deletion.
#[derive(Debug)]
pub enum PruneProgress<'a> {
    Deleted(&'a str),
    Failed {
        branch: &'a str,
        error: &'a StaleError,
    },
}

/// A branch that could not be deleted, with git's explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenBranch {
    pub branch: String,
    pub reason: String,
}

/// How a prune run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PruneOutcome {
    NothingToDo,
    DryRun,
    AllRemoved,
    PartialFailure,
}

/// Result of a prune run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneReport {
    pub mode: PruneMode,
    /// The stale branches the run was given.
    pub stale: Vec<String>,
    pub removed: Vec<String>,
    pub broken: Vec<BrokenBranch>,
}

impl PruneReport {
    pub fn outcome(&self) -> PruneOutcome {
        if self.stale.is_empty() {
            PruneOutcome::NothingToDo
        } else if self.mode.is_dry_run() {
            PruneOutcome::DryRun
        } else if self.broken.is_empty() {
            PruneOutcome::AllRemoved
        } else {
            PruneOutcome::PartialFailure
        }
    }

    /// Names of the branches that could not be deleted.
    pub fn broken_names(&self) -> Vec<&str> {
        self.broken.iter().map(|b| b.branch.as_str()).collect()
    }
}

/// Report or delete `stale` according to `mode`.
///
/// Never fails: delete errors are collected into [`PruneReport::broken`].
/// `on_progress` is called once per delete attempt with its result.
pub fn prune_branches<G, F>(
    git: &G,
    stale: &[String],
    mode: PruneMode,
    mut on_progress: F,
) -> PruneReport
where
    G: GitRunner,
    F: FnMut(PruneProgress<'_>),
{
    let mut report = PruneReport {
        mode,
        stale: stale.to_vec(),
        removed: Vec::new(),
        broken: Vec::new(),
    };

    let PruneMode::Remove { force } = mode else {
        return report;
    };

    for branch in stale {
        match delete_branch(git, branch, force) {
            Ok(()) => {
                on_progress(PruneProgress::Deleted(branch));
                report.removed.push(branch.clone());
            }
            Err(error) => {
                on_progress(PruneProgress::Failed {
                    branch,
                    error: &error,
                });
                report.broken.push(BrokenBranch {
                    branch: branch.clone(),
                    reason: failure_reason(&error),
                });
            }
        }
    }

    report
}

/// Delete a local branch.
///
/// Uses `git branch -d <branch>` (safe delete, requires fully merged), or
/// `git branch -D <branch>` when `force` is set.
pub fn delete_branch(git: &impl GitRunner, branch: &str, force: bool) -> Result<()> {
    let delete_flag = if force { "-D" } else { "-d" };
    git.run(&["branch", delete_flag, branch])?;
    Ok(())
}

/// The part of a delete error worth showing: git's own message when there is one.
pub(crate) fn failure_reason(error: &StaleError) -> String {
    match error {
        StaleError::GitCommandFailed { stderr, .. } => stderr.clone(),
        other => other.to_string(),
    }
}
