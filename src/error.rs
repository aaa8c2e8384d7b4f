//! Error types for git-stale-branches.
//!
//! Uses thiserror for derive macros and keeps configuration problems distinct
//! from git failures so callers can tell them apart by exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for stale-branch operations.
#[derive(Error, Debug)]
pub enum StaleError {
    /// The tool was invoked somewhere it cannot work, or an input is unreadable.
    #[error("{0}")]
    UserError(String),

    /// The effective configuration is unusable (e.g. an empty remote name).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Git could not be executed at all.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// A git command ran and exited with a non-zero status.
    #[error("Git operation failed: {command} exited with code {exit_code}: {stderr}")]
    GitCommandFailed {
        /// Shell-quoted rendering of the command, for messages only.
        command: String,
        /// Process exit code, or -1 if the process was terminated by a signal.
        exit_code: i32,
        /// Captured standard error (or standard output if stderr was empty).
        stderr: String,
    },
}

impl StaleError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StaleError::UserError(_) => exit_codes::USER_ERROR,
            StaleError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            StaleError::GitError(_) | StaleError::GitCommandFailed { .. } => {
                exit_codes::GIT_FAILURE
            }
        }
    }

    /// True when git reported that the remote could not be reached.
    pub fn is_no_connection(&self) -> bool {
        matches!(
            self,
            StaleError::GitCommandFailed { exit_code, .. }
                if *exit_code == exit_codes::GIT_NO_CONNECTION
        )
    }
}

/// Result type alias for stale-branch operations.
pub type Result<T> = std::result::Result<T, StaleError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn command_failed(exit_code: i32) -> StaleError {
        StaleError::GitCommandFailed {
            command: "git ls-remote -h origin".to_string(),
            exit_code,
            stderr: "fatal: unable to access".to_string(),
        }
    }

    #[test]
    fn config_error_has_its_own_exit_code() {
        let err = StaleError::ConfigError("remote must not be empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
        assert_ne!(err.exit_code(), command_failed(1).exit_code());
    }

    #[test]
    fn git_errors_share_git_failure_code() {
        assert_eq!(
            StaleError::GitError("spawn".to_string()).exit_code(),
            exit_codes::GIT_FAILURE
        );
        assert_eq!(command_failed(1).exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = StaleError::UserError("not a repository".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn only_exit_128_is_no_connection() {
        assert!(command_failed(128).is_no_connection());
        assert!(!command_failed(1).is_no_connection());
        assert!(!command_failed(129).is_no_connection());
        assert!(!StaleError::GitError("128".to_string()).is_no_connection());
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = StaleError::ConfigError("remote must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: remote must not be empty"
        );

        assert_eq!(
            command_failed(128).to_string(),
            "Git operation failed: git ls-remote -h origin exited with code 128: fatal: unable to access"
        );
    }
}
