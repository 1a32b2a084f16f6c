//! The textsum library reads a text file and condenses it into a short summary
//! by delegating the language work to a remote LLM completion service.

pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod openai;
pub mod report;
pub mod summarize;

pub use config::SummarizerConfig;
pub use error::SummarizeError;
pub use input::load_text;
pub use openai::{CompletionService, OpenAiClient};
pub use report::write_summary;
pub use summarize::{PromptMessage, PromptRole, SummarizationRequest, complete, summarize};
