//! Parsed chat completion responses.

use serde::Deserialize;

use crate::error::CompletionError;

/// A chat completion response.
///
/// Only the fields sarathi reads are modelled; everything else the endpoint
/// returns is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChoiceMessage {
    /// `null` for refusals and tool calls.
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    /// A completion with a single choice holding `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: ChoiceMessage {
                    content: Some(content.into()),
                },
            }],
        }
    }

    /// Content of the first choice.
    ///
    /// Fails with [`CompletionError::EmptyResponse`] when no choices were
    /// returned. A `null` content yields an empty string.
    pub fn into_first_message(self) -> Result<String, CompletionError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(CompletionError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_choice_wins() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "fix: handle empty input"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "chore: tidy"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;
        let completion: ChatCompletion = serde_json::from_str(json).unwrap();
        assert_eq!(
            completion.into_first_message().unwrap(),
            "fix: handle empty input"
        );
    }

    #[test]
    fn test_empty_choices_is_empty_response() {
        let completion: ChatCompletion = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            completion.into_first_message(),
            Err(CompletionError::EmptyResponse)
        ));
    }

    #[test]
    fn test_null_content_is_empty_message() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(json).unwrap();
        assert_eq!(completion.into_first_message().unwrap(), "");
    }

    #[test]
    fn test_missing_choices_fails_to_parse() {
        let result = serde_json::from_str::<ChatCompletion>(r#"{"error": "nope"}"#);
        assert!(result.is_err());
    }
}
