//! Repository context resolution.
//!
//! Finds the git repository root from any working directory so git commands
//! and the config file lookup both target the same working tree.

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Result, StaleError};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for one invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Root of the working tree the command was run in.
    pub repo_root: PathBuf,
}

impl RepoContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RepoContext)` - Successfully resolved context
    /// * `Err(StaleError::UserError)` - If not in a git repository
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            StaleError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let repo_root = git::get_repo_root(cwd)?;
        Ok(Self { repo_root })
    }

    /// Default location of the config file.
    pub fn config_path(&self) -> PathBuf {
        self.repo_root.join(CONFIG_FILE_NAME)
    }
}
