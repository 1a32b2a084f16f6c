//! Chat completions client for OpenAI-compatible services.

mod client;
mod types;

use async_trait::async_trait;

use crate::error::SummarizeError;

pub use client::OpenAiClient;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage};

/// A service that answers one chat completion request.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Sends `request` and decodes the reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails, the service answers with a
    /// non-success status, or the body cannot be decoded.
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, SummarizeError>;
}
