//! sarathi - AI-written commit messages for staged changes.
//!
//! # Overview
//!
//! sarathi reads the staged diff with `git diff --staged`, sends it to an
//! OpenAI-compatible chat completion endpoint, and commits with the returned
//! message, either after operator confirmation (`git autocommit`) or directly
//! followed by `git commit --amend` (`git gencommit`).

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod prompt;

// Re-export commonly used types
pub use commit::{Dispatcher, GitCommand, MessageGenerator, Outcome};
pub use config::Settings;
pub use error::{CommitError, CompletionError, GitError, PromptError};
pub use prompt::{PromptInfo, PromptRegistry};
