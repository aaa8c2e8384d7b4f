//! JSON rendering of a run (`--json`).

use super::types::RunReport;
use crate::error::{Result, StaleError};
use crate::inventory::ComparisonSource;
use crate::prune::{BrokenBranch, PruneOutcome};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Machine-readable summary of one run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub remote: &'a str,
    pub comparison: ComparisonSource,
    pub no_connection: bool,
    pub dry_run: bool,
    /// Whether deletion used `git branch -D`. Always false on a dry run.
    pub force: bool,
    pub outcome: PruneOutcome,
    pub stale: &'a [String],
    pub removed: &'a [String],
    pub broken: &'a [BrokenBranch],
    /// Cached remote-tracking branches the remote no longer has.
    pub outdated_cache: &'a [String],
    pub warnings: Vec<String>,
}

impl<'a> JsonReport<'a> {
    pub fn from_run(run: &'a RunReport) -> Self {
        Self {
            generated_at: Utc::now(),
            remote: &run.inventory.remote,
            comparison: run.reconciliation.source,
            no_connection: run.inventory.live.no_connection(),
            dry_run: run.prune.mode.is_dry_run(),
            force: run.prune.mode.is_forced(),
            outcome: run.prune.outcome(),
            stale: &run.prune.stale,
            removed: &run.prune.removed,
            broken: &run.prune.broken,
            outdated_cache: &run.reconciliation.outdated_cache,
            warnings: run
                .reconciliation
                .warnings
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StaleError::UserError(format!("failed to serialize report: {}", e)))
    }
}
