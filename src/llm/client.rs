//! Chat completion client for OpenAI-compatible endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::Settings;
use crate::error::CompletionError;
use crate::llm::response::ChatCompletion;
use crate::prompt::PromptInfo;

/// Maximum characters of an error body kept in [`CompletionError::Status`].
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Sends a prompt template plus task input to a language model.
///
/// This abstraction allows mocking the remote call in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &PromptInfo,
        input: &str,
    ) -> Result<ChatCompletion, CompletionError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// [`CompletionClient`] for the `/chat/completions` endpoint.
pub struct OpenAiClient {
    http: Client,
    url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(settings: &Settings) -> Result<Self, CompletionError> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or(CompletionError::MissingApiKey)?;

        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(CompletionError::ClientBuild)?;

        Ok(Self {
            http,
            url: settings.completions_url(),
            api_key,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &PromptInfo,
        input: &str,
    ) -> Result<ChatCompletion, CompletionError> {
        let request = ChatRequest {
            model: &prompt.model,
            messages: [
                Message {
                    role: "system",
                    content: &prompt.system_msg,
                },
                Message {
                    role: "user",
                    content: input,
                },
            ],
            temperature: prompt.temperature,
            max_tokens: prompt.max_tokens,
        };

        debug!(
            "POST {} (model={}, input={} chars)",
            self.url,
            prompt.model,
            input.len()
        );

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(CompletionError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(CompletionError::Request)?;

        if !status.is_success() {
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_LENGTH).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            let truncated: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            CompletionError::MalformedResponse(format!("{}. Response: {}", e, truncated))
        })
    }
}
