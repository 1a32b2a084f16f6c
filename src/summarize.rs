//! The summarize module turns raw text into a summary with a single call to
//! an LLM completion service.

use log::{debug, info};
use serde::Serialize;

use crate::config::SummarizerConfig;
use crate::constants::{MAX_TOKENS, SYSTEM_INSTRUCTION, TEMPERATURE, USER_PROMPT_PREFIX};
use crate::error::SummarizeError;
use crate::openai::{ChatCompletionRequest, CompletionService, OpenAiClient};

/// Role of a prompt turn.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    System,
    User,
}

/// One role-tagged turn of the prompt.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

/// Everything sent to the completion service for one summary.
#[derive(Clone, PartialEq, Debug)]
pub struct SummarizationRequest {
    pub model: String,
    pub system_instruction: &'static str,
    pub text: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SummarizationRequest {
    /// Creates a request with the fixed instruction and sampling parameters.
    pub fn new(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: SYSTEM_INSTRUCTION,
            text: text.into(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    pub fn user_message(&self) -> String {
        format!("{USER_PROMPT_PREFIX}{}", self.text)
    }

    /// The ordered prompt: system instruction first, then the user turn.
    pub fn prompt(&self) -> [PromptMessage; 2] {
        [
            PromptMessage {
                role: PromptRole::System,
                content: self.system_instruction.to_owned(),
            },
            PromptMessage {
                role: PromptRole::User,
                content: self.user_message(),
            },
        ]
    }

    /// The wire request: model, both prompt turns and the sampling parameters.
    pub fn to_chat_completion(&self) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: self.prompt().into(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// Summarizes `text` with the model, endpoint and credential from `config`.
///
/// # Errors
///
/// Returns an error if:
/// * The HTTP client cannot be built
/// * The completion call fails, times out or returns a non-success status
/// * The response carries no completion text
pub async fn summarize(config: &SummarizerConfig, text: &str) -> Result<String, SummarizeError> {
    let client = OpenAiClient::new(config)?;
    let request = SummarizationRequest::new(config.model.clone(), text);

    info!(
        "Requesting summary of {} characters from {}",
        text.chars().count(),
        request.model
    );
    complete(&client, &request).await
}

/// Sends `request` to `service` once and returns the trimmed text of the
/// first choice.
///
/// # Errors
///
/// Returns `SummarizeError::Parse` if the response has no content in its
/// first choice, or the service's own error. Nothing is retried.
pub async fn complete(
    service: &dyn CompletionService,
    request: &SummarizationRequest,
) -> Result<String, SummarizeError> {
    let response = service
        .create_chat_completion(&request.to_chat_completion())
        .await?;

    let summary = response.first_content()?.trim().to_owned();

    debug!("Received summary of {} characters", summary.chars().count());
    Ok(summary)
}
