//! Commit message generation from the staged diff.

use tracing::debug;

use crate::error::CommitError;
use crate::git::GitCli;
use crate::llm::CompletionClient;
use crate::prompt::{AUTOCOMMIT_TASK, PromptRegistry};

/// Composes the staged diff, the `autocommit` prompt template and the
/// completion client into a commit message.
pub struct MessageGenerator<G, C> {
    git: G,
    client: C,
    prompts: PromptRegistry,
}

impl<G: GitCli, C: CompletionClient> MessageGenerator<G, C> {
    pub fn new(git: G, client: C, prompts: PromptRegistry) -> Self {
        Self {
            git,
            client,
            prompts,
        }
    }

    /// The git handle used for reading the diff, shared with the commit step.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Generate a commit message for the currently staged changes.
    ///
    /// The diff is sent to the model exactly as git produced it, even when it
    /// is empty. Returns the content of the first choice, which may be empty.
    pub async fn generate_commit_message(&self) -> Result<String, CommitError> {
        let diff = self.git.staged_diff().await?;
        let prompt = self.prompts.get(AUTOCOMMIT_TASK)?;

        debug!(
            "Requesting commit message (model={}, diff={} chars)",
            prompt.model,
            diff.len()
        );

        let completion = self.client.complete(prompt, &diff).await?;
        let message = completion.into_first_message()?;

        debug!("Generated message: {} chars", message.len());
        Ok(message)
    }
}
