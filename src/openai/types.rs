use serde::{Deserialize, Serialize};

use crate::error::SummarizeError;
use crate::summarize::PromptMessage;

/// Body of `POST {base}/chat/completions`.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// A response carrying `text` as its only choice.
    pub fn with_content(text: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: ChoiceMessage {
                    content: Some(text.into()),
                },
            }],
        }
    }

    /// Content of the first choice.
    ///
    /// # Errors
    ///
    /// Returns `SummarizeError::Parse` if there are no choices or the first
    /// one has no content.
    pub fn first_content(&self) -> Result<&str, SummarizeError> {
        let choice = self
            .choices
            .first()
            .ok_or_else(|| SummarizeError::Parse("response contains no choices".to_owned()))?;

        choice.message.content.as_deref().ok_or_else(|| {
            SummarizeError::Parse("first choice has no message content".to_owned())
        })
    }
}
