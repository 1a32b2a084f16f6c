use std::sync::Mutex;

use async_trait::async_trait;
use textsum::{
    CompletionService, SummarizeError,
    openai::{ChatCompletionRequest, ChatCompletionResponse},
};

/// What the stubbed completion service answers with.
pub(crate) enum StubReply {
    Text(String),
    NoChoices,
    Unauthorized,
    Unavailable,
}

pub(crate) struct StubCompletionService {
    reply: StubReply,
    calls: Mutex<Vec<ChatCompletionRequest>>,
}

impl StubCompletionService {
    pub fn new(reply: StubReply) -> Self {
        StubCompletionService {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(StubReply::Text(text.to_owned()))
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<ChatCompletionRequest> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl CompletionService for StubCompletionService {
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, SummarizeError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(request.clone());

        match &self.reply {
            StubReply::Text(text) => Ok(ChatCompletionResponse::with_content(text.clone())),
            StubReply::NoChoices => Ok(ChatCompletionResponse {
                choices: Vec::new(),
            }),
            StubReply::Unauthorized => Err(SummarizeError::Authorization(
                "service returned 401 Unauthorized".to_owned(),
            )),
            StubReply::Unavailable => Err(SummarizeError::RemoteService(
                "service returned 503 Service Unavailable".to_owned(),
            )),
        }
    }
}
