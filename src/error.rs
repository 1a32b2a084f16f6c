//! Error kinds surfaced by the summarization pipeline.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Failed to read input file {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input file {} has {chars} characters, limit is {limit}", path.display())]
    InputTooLarge {
        path: PathBuf,
        chars: usize,
        limit: usize,
    },

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Completion service error: {0}")]
    RemoteService(String),

    #[error("Completion service did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Malformed completion response: {0}")]
    Parse(String),
}
