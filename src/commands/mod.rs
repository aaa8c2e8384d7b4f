//! Command implementations for git-stale-branches.
//!
//! The tool has a single command; this module routes parsed arguments to it.

mod stale;

use crate::cli::Cli;
use crate::error::Result;

/// Dispatch the parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    stale::cmd_stale(cli)
}
