//! Line parsers for the git output the inventory consumes.
//!
//! Each parser takes a single trimmed line and returns `None` for anything it
//! does not recognize. None of them fail.

use super::LocalBranchLink;
use regex::Regex;
use std::sync::LazyLock;

/// `localName@{upstreamRef}` as printed by
/// `git branch --format=%(refname:short)@{%(upstream)}`.
/// Ref names cannot contain `@{`, so the first occurrence is the separator.
static LOCAL_BRANCH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<local>.+?)@\{(?P<upstream>.*)\}$").expect("Invalid local branch regex")
});

/// `<sha>\trefs/heads/<name>` as printed by `git ls-remote -h`.
static LIVE_HEAD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]+\s+refs/heads/(?P<name>\S+)$").expect("Invalid ls-remote regex")
});

/// Parse one line of `git branch --format=%(refname:short)@{%(upstream)}`.
///
/// Returns a link only when the upstream is a remote-tracking ref of `remote`.
/// Untracked branches (`name@{}`), branches tracking another remote, and
/// branches tracking a local ref are skipped.
pub fn parse_local_branch_line(line: &str, remote: &str) -> Option<LocalBranchLink> {
    let caps = LOCAL_BRANCH_REGEX.captures(line)?;
    let local = &caps["local"];
    let upstream = &caps["upstream"];

    let remote_branch = upstream
        .strip_prefix("refs/remotes/")?
        .strip_prefix(remote)?
        .strip_prefix('/')?;

    if remote_branch.is_empty() {
        return None;
    }

    Some(LocalBranchLink {
        local: local.to_string(),
        remote: remote_branch.to_string(),
    })
}

/// Parse one line of `git branch -r`.
///
/// `origin/feature` yields `feature` for remote `origin`. Symbolic refs such
/// as `origin/HEAD -> origin/main` yield their own name (`HEAD`); callers
/// decide what to do with it.
pub fn parse_cached_remote_line(line: &str, remote: &str) -> Option<String> {
    let name = line.split(" -> ").next()?.trim();
    let short = name.strip_prefix(remote)?.strip_prefix('/')?;

    if short.is_empty() {
        None
    } else {
        Some(short.to_string())
    }
}

/// Parse one line of `git ls-remote -h <remote>` into a branch name.
pub fn parse_live_head_line(line: &str) -> Option<String> {
    LIVE_HEAD_REGEX
        .captures(line)
        .map(|caps| caps["name"].to_string())
}

/// Parse one line of `git remote -v` into the remote name.
pub fn parse_remote_line(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}
