//! The `git autocommit` and `git gencommit` workflows.

use std::io::Write;

use clap::Subcommand;
use tracing::{debug, info};

use crate::commit::confirm::Confirmation;
use crate::commit::message::MessageGenerator;
use crate::error::CommitError;
use crate::git::GitCli;
use crate::llm::CompletionClient;

/// Banner printed above a generated message awaiting confirmation.
pub const BANNER: &str = "**Below is the generated commit message**";

/// Notice printed when the operator declines the generated message.
pub const DECLINED_NOTICE: &str = "I will try to generate a better commit message next time";

/// Commit workflows under `sarathi git`.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitCommand {
    /// Generate a commit message, show it, and commit after confirmation
    Autocommit,
    /// Generate a commit message, commit, then reopen the commit with `git commit --amend`
    Gencommit,
}

/// How a workflow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The model returned an empty message; nothing was committed.
    NothingToCommit,
    Committed { message: String },
    CommittedAndAmended { message: String },
    /// The operator rejected the message; nothing was committed.
    Declined,
}

/// Sequences message generation, confirmation and the git commit calls.
pub struct Dispatcher<G, C, F> {
    generator: MessageGenerator<G, C>,
    confirmation: F,
}

impl<G, C, F> Dispatcher<G, C, F>
where
    G: GitCli,
    C: CompletionClient,
    F: Confirmation,
{
    pub fn new(generator: MessageGenerator<G, C>, confirmation: F) -> Self {
        Self {
            generator,
            confirmation,
        }
    }

    /// Run the selected workflow, writing status lines to `out`.
    ///
    /// A missing sub-command fails before git is touched.
    pub async fn run<W: Write>(
        &self,
        command: Option<GitCommand>,
        out: &mut W,
    ) -> Result<Outcome, CommitError> {
        match command {
            Some(GitCommand::Gencommit) => self.gencommit().await,
            Some(GitCommand::Autocommit) => self.autocommit(out).await,
            None => Err(CommitError::MissingSubCommand),
        }
    }

    /// Commit the generated message, then amend the new commit with no message.
    ///
    /// The amend step reopens the commit in git's editor (or keeps the
    /// message, depending on git configuration).
    async fn gencommit(&self) -> Result<Outcome, CommitError> {
        let Some(message) = self.generate().await? else {
            return Ok(Outcome::NothingToCommit);
        };

        let git = self.generator.git();
        git.commit(&message).await?;
        git.amend().await?;

        info!("Committed and amended");
        Ok(Outcome::CommittedAndAmended { message })
    }

    async fn autocommit<W: Write>(&self, out: &mut W) -> Result<Outcome, CommitError> {
        let Some(message) = self.generate().await? else {
            return Ok(Outcome::NothingToCommit);
        };

        writeln!(out, "{}\n", BANNER).map_err(CommitError::Output)?;
        writeln!(out, "{}", message).map_err(CommitError::Output)?;
        out.flush().map_err(CommitError::Output)?;

        if !self.confirmation.confirm()? {
            writeln!(out, "{}", DECLINED_NOTICE).map_err(CommitError::Output)?;
            return Ok(Outcome::Declined);
        }

        self.generator.git().commit(&message).await?;

        info!("Committed");
        Ok(Outcome::Committed { message })
    }

    /// Generate a message, mapping an empty one to `None`.
    ///
    /// Whitespace-only content also counts as empty, since git would reject it.
    async fn generate(&self) -> Result<Option<String>, CommitError> {
        let message = self.generator.generate_commit_message().await?;
        if message.trim().is_empty() {
            debug!("Empty commit message generated, nothing to commit");
            return Ok(None);
        }
        Ok(Some(message))
    }
}
