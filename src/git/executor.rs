//! Git invocations for the commit workflow.
//!
//! All operations shell out to the system `git` binary, inheriting the user's
//! existing git config, hooks, and editor.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// The git operations the commit workflow needs.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitCli: Send + Sync {
    /// Return the staged diff (`git diff --staged`) as text.
    async fn staged_diff(&self) -> Result<String, GitError>;

    /// Create a commit with the given message (`git commit -m <message>`).
    async fn commit(&self, message: &str) -> Result<(), GitError>;

    /// Amend the last commit without a new message (`git commit --amend`).
    async fn amend(&self) -> Result<(), GitError>;
}

/// Check that the git binary can be found.
///
/// Uses the `which` crate for cross-platform executable detection.
pub fn check_git_installed(program: &str) -> Result<(), GitError> {
    which::which(program).map(|_| ()).map_err(|_| GitError::NotInstalled {
        program: program.to_string(),
    })
}

/// [`GitCli`] backed by the system git binary.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
    workdir: Option<PathBuf>,
}

impl SystemGit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            workdir: None,
        }
    }

    /// Run git inside `dir` instead of the current directory.
    pub fn with_workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    fn command(&self, args: &[&str]) -> Command {
        debug!("Running {} {}", self.program, args.join(" "));
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_error(&self, e: std::io::Error) -> GitError {
        if e.kind() == ErrorKind::NotFound {
            GitError::NotInstalled {
                program: self.program.clone(),
            }
        } else {
            GitError::SpawnFailed(e)
        }
    }

    /// Run git with inherited stdio so the user sees its output (and any editor).
    async fn run_interactive(&self, args: &[&str], operation: &str) -> Result<(), GitError> {
        let status = self
            .command(args)
            .status()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !status.success() {
            return Err(GitError::NonZeroExit {
                operation: operation.to_string(),
                code: status.code(),
                stderr: String::new(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl GitCli for SystemGit {
    async fn staged_diff(&self) -> Result<String, GitError> {
        let output = self
            .command(&["diff", "--staged"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::NonZeroExit {
                operation: "diff --staged".to_string(),
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        let diff = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("Staged diff: {} bytes", diff.len());
        Ok(diff)
    }

    async fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_interactive(&["commit", "-m", message], "commit")
            .await
    }

    async fn amend(&self) -> Result<(), GitError> {
        self.run_interactive(&["commit", "--amend"], "commit --amend")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_git_installed_unknown_program() {
        let result = check_git_installed("definitely-not-a-real-git-binary");
        assert!(matches!(result, Err(GitError::NotInstalled { .. })));
    }

    #[tokio::test]
    async fn test_missing_binary_maps_to_not_installed() {
        let git = SystemGit::new("definitely-not-a-real-git-binary");
        let result = git.staged_diff().await;
        match result {
            Err(GitError::NotInstalled { program }) => {
                assert_eq!(program, "definitely-not-a-real-git-binary")
            }
            other => panic!("Expected NotInstalled, got {:?}", other),
        }
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_interactive_non_zero_exit() {
        // `false` ignores its arguments and exits with code 1
        let git = SystemGit::new("false");
        let result = git.commit("msg").await;
        match result {
            Err(GitError::NonZeroExit { operation, code, .. }) => {
                assert_eq!(operation, "commit");
                assert_eq!(code, Some(1));
            }
            other => panic!("Expected NonZeroExit, got {:?}", other),
        }
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_staged_diff_returns_stdout_unchanged() {
        // `echo` prints its arguments, standing in for git's stdout
        let git = SystemGit::new("echo");
        let diff = git.staged_diff().await.unwrap();
        assert_eq!(diff, "diff --staged\n");
    }
}
