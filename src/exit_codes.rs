//! Exit code constants for git-stale-branches.
//!
//! - 0: Success (including dry-run and partial delete failures)
//! - 1: User error (not a repository, unreadable config path)
//! - 2: Configuration error (empty remote, invalid config file)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid invocation context or unreadable input.
pub const USER_ERROR: i32 = 1;

/// Configuration error: the effective settings cannot be used.
pub const CONFIG_ERROR: i32 = 2;

/// Git operation failure: a git command failed for an unclassified reason.
pub const GIT_FAILURE: i32 = 3;

/// Exit status git uses for fatal errors, including an unreachable remote.
pub const GIT_NO_CONNECTION: i32 = 128;
