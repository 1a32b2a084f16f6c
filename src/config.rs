//! Explicit client configuration. The credential is resolved once and handed
//! to the summarization client instead of living in process-wide state.

use log::{debug, warn};

use crate::constants::{API_KEY_ENV_NAME, DEFAULT_MODEL};
use crate::error::SummarizeError;

/// Settings for one summarization client.
#[derive(Clone, PartialEq, Eq)]
pub struct SummarizerConfig {
    /// Credential for the completion service
    pub api_key: String,
    /// Remote model identifier
    pub model: String,
    /// Optional OpenAI-compatible endpoint override
    pub base_url: Option<String>,
    /// Optional bound on the request duration
    pub timeout_seconds: Option<u64>,
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl SummarizerConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            timeout_seconds: None,
        }
    }

    /// Reads the credential from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `SummarizeError::Authorization` if the credential variable is
    /// unset or blank.
    pub fn from_env(model: Option<&str>) -> Result<Self, SummarizeError> {
        Self::from_lookup(model, |name| std::env::var(name).ok())
    }

    /// Same as [`SummarizerConfig::from_env`] with an injected variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `SummarizeError::Authorization` if the lookup yields no usable
    /// credential.
    pub fn from_lookup<F>(model: Option<&str>, lookup: F) -> Result<Self, SummarizeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV_NAME)
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                SummarizeError::Authorization(format!("{API_KEY_ENV_NAME} is not set"))
            })?;

        Ok(Self::new(api_key, model.unwrap_or(DEFAULT_MODEL)))
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: Option<u64>) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

/// Loads variables from a `.env` file in the working directory, if any.
/// A missing file is fine; a broken one is reported and skipped.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment variables from {}", path.display()),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!("Failed to load .env file: {err}"),
    }
}
