use crate::error::{Result, StaleError};
use crate::git::{GitOutput, GitRunner, render_command};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A [`GitRunner`] that answers from a script and records every call.
///
/// Commands are keyed by their arguments joined with single spaces, e.g.
/// `"ls-remote -h origin"`. Unscripted commands fail with exit code 1.
#[derive(Default)]
pub(crate) struct ScriptedGit {
    responses: HashMap<String, std::result::Result<String, (i32, String)>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedGit {
    pub(crate) fn ok(mut self, command: &str, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), Ok(stdout.to_string()));
        self
    }

    pub(crate) fn fail(mut self, command: &str, exit_code: i32, stderr: &str) -> Self {
        self.responses
            .insert(command.to_string(), Err((exit_code, stderr.to_string())));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl GitRunner for ScriptedGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        let key = args.join(" ");
        self.calls.borrow_mut().push(key.clone());

        match self.responses.get(&key) {
            Some(Ok(stdout)) => Ok(GitOutput {
                stdout: stdout.trim().to_string(),
                stderr: String::new(),
            }),
            Some(Err((exit_code, stderr))) => Err(StaleError::GitCommandFailed {
                command: render_command(args),
                exit_code: *exit_code,
                stderr: stderr.clone(),
            }),
            None => Err(StaleError::GitCommandFailed {
                command: render_command(args),
                exit_code: 1,
                stderr: format!("unscripted command: {}", key),
            }),
        }
    }
}

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    temp_dir
}

/// A bare `origin.git` plus a `work` clone that tracks it.
pub(crate) struct RemoteFixture {
    dir: TempDir,
    pub(crate) origin: PathBuf,
    pub(crate) work: PathBuf,
}

impl RemoteFixture {
    /// Create a branch at HEAD in the working clone and push it with upstream tracking.
    pub(crate) fn push_branch(&self, branch: &str) {
        git(&self.work, &["branch", branch]);
        git(&self.work, &["push", "-u", "origin", branch]);
    }

    /// Delete a branch directly in the bare remote, leaving the clone's cache untouched.
    pub(crate) fn delete_on_remote(&self, branch: &str) {
        git(&self.origin, &["branch", "-D", branch]);
    }

    /// Add a commit to a local branch that is never pushed.
    pub(crate) fn commit_locally(&self, branch: &str) {
        git(&self.work, &["checkout", "-q", branch]);
        let file = format!("{}.txt", branch.replace('/', "-"));
        std::fs::write(self.work.join(&file), format!("{}\n", branch)).unwrap();
        git(&self.work, &["add", "."]);
        git(&self.work, &["commit", "-q", "-m", &format!("Work on {}", branch)]);
        git(&self.work, &["checkout", "-q", "main"]);
    }

    /// Point `origin` at a path that does not exist.
    pub(crate) fn break_remote(&self) {
        let missing = self.dir.path().join("gone.git");
        git(
            &self.work,
            &["remote", "set-url", "origin", &missing.to_string_lossy()],
        );
    }

    pub(crate) fn local_branches(&self) -> Vec<String> {
        git(&self.work, &["branch", "--format=%(refname:short)"])
            .lines()
            .map(str::to_string)
            .collect()
    }
}

pub(crate) fn create_repo_with_origin() -> RemoteFixture {
    let temp_dir = TempDir::new().unwrap();
    let origin = temp_dir.path().join("origin.git");
    let work = temp_dir.path().join("work");
    std::fs::create_dir_all(&origin).unwrap();
    std::fs::create_dir_all(&work).unwrap();

    git(&origin, &["init", "--bare", "-q"]);
    git(&origin, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    init_repo(&work);
    git(
        &work,
        &["remote", "add", "origin", &origin.to_string_lossy()],
    );
    git(&work, &["push", "-q", "-u", "origin", "main"]);
    git(&work, &["remote", "set-head", "origin", "main"]);

    RemoteFixture {
        dir: temp_dir,
        origin,
        work,
    }
}

fn init_repo(path: &Path) {
    git(path, &["init", "-q"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-q", "-m", "Initial commit"]);
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
