//! Implementation of the stale-branch command.
//!
//! Runs the whole pipeline for one invocation:
//!
//! 1. Resolve settings (command line over config file) and validate the remote
//! 2. Gather live, local and cached branches (strictly in that order)
//! 3. Reconcile them and compute the stale local branches
//! 4. Report them (default, dry-run) or delete them (`--prune`)
//!
//! # Safety
//!
//! - Default behavior is dry-run: nothing is deleted without `--prune`
//! - Deletion uses `git branch -d`, which refuses unmerged branches,
//!   unless `--force` (or `force: true` in the config) selects `-D`
//! - An unreachable remote never makes a branch look stale

mod display;
mod report;
mod types;


pub use report::JsonReport;
pub use types::{RunReport, Settings};

use crate::cli::Cli;
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::Result;
use crate::git::{GitRunner, SystemGit};
use crate::inventory::{self, validate_remote};
use crate::prune::prune_branches;
use display::{print_progress, print_stale_list, print_summary, print_warnings};

/// Execute the stale-branch command in the current repository.
pub fn cmd_stale(cli: Cli) -> Result<()> {
    // An explicit empty remote is a configuration error before git is touched.
    if let Some(remote) = cli.remote.as_deref() {
        validate_remote(remote)?;
    }

    let ctx = RepoContext::resolve()?;
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(ctx.config_path())?,
    };
    let settings = Settings::resolve(&cli, &config);

    let git = SystemGit::new(&ctx.repo_root);
    let run = run_pipeline(&git, &settings)?;

    if settings.json {
        println!("{}", JsonReport::from_run(&run).to_json()?);
    }

    Ok(())
}

/// Gather, reconcile and prune against any [`GitRunner`].
///
/// Prints human-readable output unless `settings.json` is set.
pub fn run_pipeline(git: &impl GitRunner, settings: &Settings) -> Result<RunReport> {
    let human = !settings.json;

    let inventory = inventory::collect(git, &settings.remote)?;
    let reconciliation = inventory::reconcile(&inventory);
    let stale = reconciliation.stale_branches(&inventory.local);

    if human {
        print_warnings(&reconciliation.warnings);
        print_stale_list(&settings.remote, &stale);
    }

    let prune = prune_branches(git, &stale, settings.mode, |progress| {
        if human {
            print_progress(progress);
        }
    });

    if human {
        print_summary(&prune, &settings.remote);
    }

    Ok(RunReport {
        inventory,
        reconciliation,
        prune,
    })
}
