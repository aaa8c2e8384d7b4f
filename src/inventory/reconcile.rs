//! Reconciliation of gathered branch sets into an authoritative remote set.

use super::{HEAD, Inventory, LiveBranches, LocalBranchLink, Unreachable};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Which branch set the staleness comparison is made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonSource {
    /// Branches reported by the remote itself.
    Live,
    /// Locally cached remote-tracking branches (remote unreachable).
    Cache,
}

/// Something the user should know about, found during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The remote is not configured in this repository.
    RemoteNotFound {
        remote: String,
        available: Vec<String>,
    },
    /// The remote is configured but could not be queried.
    NoConnection { remote: String, reason: String },
    /// Remote-tracking refs exist locally for branches the remote no longer has.
    OutdatedCache {
        remote: String,
        branches: Vec<String>,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::RemoteNotFound { remote, available } => {
                let available = if available.is_empty() {
                    "(none)".to_string()
                } else {
                    available.join(", ")
                };
                write!(
                    f,
                    "remote '{}' is not configured (available remotes: {}). \
                     Comparing against locally cached remote-tracking branches only.",
                    remote, available
                )
            }
            Warning::NoConnection { remote, reason } => {
                write!(
                    f,
                    "could not reach remote '{}'. \
                     Comparing against locally cached remote-tracking branches only.",
                    remote
                )?;
                if !reason.is_empty() {
                    write!(f, "\n  git said: {}", reason)?;
                }
                Ok(())
            }
            Warning::OutdatedCache { remote, branches } => {
                write!(
                    f,
                    "{} remote-tracking branch(es) no longer exist on '{}' but are still cached locally:",
                    branches.len(),
                    remote
                )?;
                for branch in branches {
                    write!(f, "\n  - {}/{}", remote, branch)?;
                }
                write!(f, "\nRun `git fetch --prune {}` to clean them up.", remote)
            }
        }
    }
}

/// The authoritative remote branch set and what was noticed building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub source: ComparisonSource,
    /// Remote branch names a tracked branch must appear in to be live.
    pub authoritative: Vec<String>,
    /// Cached remote-tracking branches missing from the live set.
    pub outdated_cache: Vec<String>,
    pub warnings: Vec<Warning>,
}

impl Reconciliation {
    /// Local branches whose upstream is missing from the authoritative set.
    ///
    /// Output follows the order of `local`. Links with an empty upstream name,
    /// and anything named `HEAD`, are never reported.
    pub fn stale_branches(&self, local: &[LocalBranchLink]) -> Vec<String> {
        let known: HashSet<&str> = self.authoritative.iter().map(String::as_str).collect();

        local
            .iter()
            .filter(|link| !link.remote.is_empty())
            .filter(|link| link.remote != HEAD && link.local != HEAD)
            .filter(|link| !known.contains(link.remote.as_str()))
            .map(|link| link.local.clone())
            .collect()
    }
}

/// Decide which remote branch set is authoritative.
///
/// With live data the live set wins outright, and cached entries absent from
/// it are reported. Without live data the cache is used as is; an unreachable
/// remote never makes a branch look deleted.
pub fn reconcile(inventory: &Inventory) -> Reconciliation {
    let remote = inventory.remote.clone();

    match &inventory.live {
        LiveBranches::Unreachable(why) => {
            let warning = match why {
                Unreachable::RemoteNotConfigured { available } => Warning::RemoteNotFound {
                    remote,
                    available: available.clone(),
                },
                Unreachable::NoConnection { reason } => Warning::NoConnection {
                    remote,
                    reason: reason.clone(),
                },
            };

            Reconciliation {
                source: ComparisonSource::Cache,
                authoritative: inventory
                    .cached
                    .iter()
                    .filter(|name| name.as_str() != HEAD)
                    .cloned()
                    .collect(),
                outdated_cache: Vec::new(),
                warnings: vec![warning],
            }
        }
        LiveBranches::Reachable(live) => {
            let outdated_cache: Vec<String> = inventory
                .cached
                .iter()
                .filter(|name| name.as_str() != HEAD)
                .filter(|name| !live.contains(name))
                .cloned()
                .collect();

            let warnings = if outdated_cache.is_empty() {
                Vec::new()
            } else {
                vec![Warning::OutdatedCache {
                    remote,
                    branches: outdated_cache.clone(),
                }]
            };

            Reconciliation {
                source: ComparisonSource::Live,
                authoritative: live.clone(),
                outdated_cache,
                warnings,
            }
        }
    }
}
