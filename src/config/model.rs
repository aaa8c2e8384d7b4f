//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// File name looked up at the repository root when no path is given.
pub const CONFIG_FILE_NAME: &str = ".stale-branches.yaml";

/// Remote used when neither the command line nor the config file names one.
pub const DEFAULT_REMOTE: &str = "origin";

/// Settings read from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote whose branches are reconciled (default: "origin").
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Always use forced delete (`git branch -D`).
    #[serde(default)]
    pub force: bool,
}

fn default_remote() -> String {
    DEFAULT_REMOTE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            force: false,
        }
    }
}
