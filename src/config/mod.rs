//! Configuration for git-stale-branches.
//!
//! An optional YAML file (`.stale-branches.yaml` at the repository root by
//! default) supplies defaults for the remote and force flag. Unknown fields
//! are ignored and every field has a default, so an empty file is valid.

mod model;
mod operations;


pub use model::{CONFIG_FILE_NAME, Config, DEFAULT_REMOTE};
