//! Human-readable output for the stale-branch command.

use crate::inventory::Warning;
use crate::prune::{PruneOutcome, PruneProgress, PruneReport, failure_reason};

/// Print reconciliation warnings to stderr.
pub fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
}

/// Print the stale branch list (skipped when there is nothing to list).
pub fn print_stale_list(remote: &str, stale: &[String]) {
    if let Some(text) = format_stale_list(remote, stale) {
        println!("{}", text);
    }
}

/// Print one delete progress event.
pub fn print_progress(progress: PruneProgress<'_>) {
    match progress {
        PruneProgress::Deleted(branch) => println!("Deleted: {}", branch),
        PruneProgress::Failed { branch, error } => {
            eprintln!("Failed:  {} ({})", branch, failure_reason(error))
        }
    }
}

/// Print the final summary.
pub fn print_summary(report: &PruneReport, remote: &str) {
    println!("{}", format_summary(report, remote));
}

pub fn format_stale_list(remote: &str, stale: &[String]) -> Option<String> {
    if stale.is_empty() {
        return None;
    }

    let mut text = format!(
        "Local branches whose upstream was deleted on '{}' ({}):",
        remote,
        stale.len()
    );
    for branch in stale {
        text.push_str(&format!("\n  - {}", branch));
    }
    Some(text)
}

pub fn format_summary(report: &PruneReport, remote: &str) -> String {
    match report.outcome() {
        PruneOutcome::NothingToDo => {
            format!("No stale branches found for remote '{}'. Nothing to do.", remote)
        }
        PruneOutcome::DryRun => "\nDry-run mode: no branches deleted.\n\
             Run with --prune to delete them."
            .to_string(),
        PruneOutcome::AllRemoved => {
            format!("\nRemoved {} stale branch(es).", report.removed.len())
        }
        PruneOutcome::PartialFailure => {
            let mut text = format!(
                "\nRemoved {} of {} stale branch(es).\nCould not remove {} branch(es):",
                report.removed.len(),
                report.stale.len(),
                report.broken.len()
            );
            for branch in report.broken_names() {
                text.push_str(&format!("\n  - {}", branch));
            }
            if !report.mode.is_forced() {
                text.push_str(
                    "\n\nThese branches may contain unmerged commits. \
                     Rerun with --prune --force to delete them anyway.",
                );
            }
            text
        }
    }
}
