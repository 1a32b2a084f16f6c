//! Input loading: the whole file is read into memory as UTF-8 text.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::SummarizeError;

/// Reads the file at `path` as UTF-8 text.
///
/// No chunking or truncation happens here. When `max_chars` is set, input
/// longer than the limit is rejected instead of being sent.
///
/// # Errors
///
/// Returns `SummarizeError::Input` if the file is missing, unreadable or not
/// valid UTF-8, and `SummarizeError::InputTooLarge` if it exceeds `max_chars`.
pub fn load_text(path: &Path, max_chars: Option<usize>) -> Result<String, SummarizeError> {
    let text = fs::read_to_string(path).map_err(|source| SummarizeError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(limit) = max_chars {
        let chars = text.chars().count();
        if chars > limit {
            return Err(SummarizeError::InputTooLarge {
                path: path.to_path_buf(),
                chars,
                limit,
            });
        }
    }

    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
