//! Prompt templates keyed by task name.

pub mod registry;

pub use registry::{AUTOCOMMIT_TASK, DEFAULT_MODEL, PromptInfo, PromptRegistry};
