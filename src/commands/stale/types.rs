//! Types shared by the stale-branch command stages.

use crate::cli::Cli;
use crate::config::Config;
use crate::inventory::{Inventory, Reconciliation};
use crate::prune::{PruneMode, PruneReport};

/// Effective settings after merging the config file and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub remote: String,
    pub mode: PruneMode,
    pub json: bool,
}

impl Settings {
    /// `--remote` overrides the file; `force` is on if either source enables it;
    /// deletion only happens when `--prune` is given.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let remote = cli
            .remote
            .clone()
            .unwrap_or_else(|| config.remote.clone());
        let force = cli.force || config.force;

        Self {
            remote,
            mode: PruneMode::from_flags(cli.prune, force),
            json: cli.json,
        }
    }
}

/// Everything one run produced, stage by stage.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub inventory: Inventory,
    pub reconciliation: Reconciliation,
    pub prune: PruneReport,
}
