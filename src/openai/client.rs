use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};

use super::CompletionService;
use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::SummarizerConfig;
use crate::constants::DEFAULT_BASE_URL;
use crate::error::SummarizeError;

/// HTTP client for the chat completions endpoint.
pub struct OpenAiClient {
    http: Client,
    endpoint: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl OpenAiClient {
    /// Creates a client for the endpoint, credential and timeout in `config`.
    ///
    /// # Errors
    ///
    /// Returns `SummarizeError::RemoteService` if the HTTP client cannot be
    /// built.
    pub fn new(config: &SummarizerConfig) -> Result<Self, SummarizeError> {
        let timeout = config.timeout_seconds.map(Duration::from_secs);

        let builder = Client::builder();
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        let http = builder.build().map_err(|err| {
            SummarizeError::RemoteService(format!("Failed to build HTTP client: {err}"))
        })?;

        let base_url = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, err: &reqwest::Error) -> SummarizeError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => SummarizeError::Timeout(timeout),
            _ => SummarizeError::RemoteService(format!("Request failed: {err}")),
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, SummarizeError> {
        debug!("POST {} with model {}", self.endpoint, request.model);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| self.transport_error(&err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.transport_error(&err))?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SummarizeError::Authorization(format!(
                "service returned {status}: {body}"
            )));
        }
        if !status.is_success() {
            return Err(SummarizeError::RemoteService(format!(
                "service returned {status}: {body}"
            )));
        }

        serde_json::from_str(&body).map_err(|err| {
            SummarizeError::Parse(format!("Failed to decode chat completion: {err}"))
        })
    }
}
