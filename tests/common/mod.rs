//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use sarathi::git::SystemGit;

/// A test git repository driven through the git binary.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
}

impl TestRepo {
    /// Create a new git repository in a temp directory with a local identity
    /// and a non-interactive editor.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Self { dir };
        repo.git(&["init", "--quiet"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["config", "core.editor", "true"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A [`SystemGit`] that runs inside this repository.
    pub fn system_git(&self) -> SystemGit {
        SystemGit::new("git").with_workdir(self.path())
    }

    /// Run git in the repository and return stdout, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file and stage it.
    pub fn stage_file(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).expect("Failed to write test file");
        self.git(&["add", name]);
    }

    /// Number of commits reachable from HEAD (0 for an unborn branch).
    pub fn commit_count(&self) -> usize {
        let output = Command::new("git")
            .args(["rev-list", "--count", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        if !output.status.success() {
            return 0;
        }
        String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse()
            .expect("rev-list --count should print a number")
    }

    /// Full message of the HEAD commit.
    pub fn head_message(&self) -> String {
        self.git(&["log", "-1", "--format=%B"]).trim_end().to_string()
    }
}
