//! Named prompt templates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PromptError;

/// Task key for commit message generation.
pub const AUTOCOMMIT_TASK: &str = "autocommit";

/// Default model for built-in templates.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const AUTOCOMMIT_SYSTEM_MSG: &str = "You are a helpful assistant that writes git commit messages. \
You will be given the output of `git diff --staged`. Write a single commit message for these changes: \
a short imperative subject line of at most 72 characters, optionally followed by a blank line and a brief body \
explaining why the change was made. Respond with the commit message only, without quotes, markdown, or commentary.";

/// A prompt template for one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptInfo {
    /// System message sent ahead of the task input.
    pub system_msg: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Immutable mapping from task name to prompt template.
#[derive(Debug, Clone, Default)]
pub struct PromptRegistry {
    prompts: HashMap<String, PromptInfo>,
}

impl PromptRegistry {
    /// The templates shipped with sarathi.
    pub fn builtin() -> Self {
        let mut prompts = HashMap::new();
        prompts.insert(
            AUTOCOMMIT_TASK.to_string(),
            PromptInfo {
                system_msg: AUTOCOMMIT_SYSTEM_MSG.to_string(),
                model: DEFAULT_MODEL.to_string(),
                temperature: Some(0.2),
                max_tokens: None,
            },
        );
        Self { prompts }
    }

    /// Add or replace a template.
    pub fn with_prompt(mut self, task: impl Into<String>, info: PromptInfo) -> Self {
        self.prompts.insert(task.into(), info);
        self
    }

    /// Use `model` for every template.
    pub fn with_model(mut self, model: &str) -> Self {
        for info in self.prompts.values_mut() {
            info.model = model.to_string();
        }
        self
    }

    pub fn get(&self, task: &str) -> Result<&PromptInfo, PromptError> {
        self.prompts
            .get(task)
            .ok_or_else(|| PromptError::UnknownTask(task.to_string()))
    }
}
