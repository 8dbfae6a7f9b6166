//! Error types for sarathi modules using thiserror.

use thiserror::Error;

/// Errors from invoking the git binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("'{program}' was not found in PATH. Install git or set SARATHI_GIT.")]
    NotInstalled { program: String },

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {operation} exited with {}: {stderr}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        operation: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Errors from the chat completion endpoint.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("No API key configured. Set SARATHI_OPENAI_API_KEY or OPENAI_API_KEY.")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Completion request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Completion endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Completion endpoint returned a malformed response: {0}")]
    MalformedResponse(String),

    #[error("Completion endpoint returned no choices")]
    EmptyResponse,
}

/// Errors from prompt template lookup.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("No prompt template registered for task '{0}'")]
    UnknownTask(String),
}

/// Errors from the commit workflow.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Failed to read confirmation: {0}")]
    Confirmation(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Missing git sub-command. Expected one of: autocommit, gencommit")]
    MissingSubCommand,
}

impl CommitError {
    /// Whether this error is a command-line usage mistake rather than a runtime failure.
    pub fn is_usage(&self) -> bool {
        matches!(self, CommitError::MissingSubCommand)
    }
}
