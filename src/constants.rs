pub const API_KEY_ENV_NAME: &str = "OPENAI_API_KEY";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant that summarizes long text into concise summaries.";

pub const USER_PROMPT_PREFIX: &str = "Summarize the following text:\n\n";

pub const TEMPERATURE: f32 = 0.5;

pub const MAX_TOKENS: u32 = 500;

pub const SUMMARY_HEADER: &str = "--- Summary ---";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
