//! CLI argument parsing for git-stale-branches.
//!
//! Uses clap derive macros for declarative argument definitions. The run
//! itself lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Find local branches whose upstream branch was deleted on the remote.
///
/// By default the stale branches are only listed. Pass `--prune` to delete
/// them. If the remote cannot be reached, the locally cached
/// remote-tracking branches are used instead and nothing is guessed.
#[derive(Parser, Debug, Default)]
#[command(name = "git-stale-branches")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Remote to compare against (default: config file, then "origin").
    #[arg(short, long)]
    pub remote: Option<String>,

    /// Delete the stale branches instead of only listing them.
    #[arg(long)]
    pub prune: bool,

    /// Use `git branch -D`, deleting branches even if they are not fully merged.
    #[arg(short, long)]
    pub force: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Path to the config file (default: <repo root>/.stale-branches.yaml).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
