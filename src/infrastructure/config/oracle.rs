//! Decision oracle configuration.
//!
//! The API key is read from `OPENAI_API_KEY` at runtime and never from the
//! config file.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::llm::openai::DEFAULT_BASE_URL;
use crate::application::decision::oracle::DEFAULT_MAX_TOKENS;

/// OpenAI completion settings for the oracle strategy.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    /// Model identifier.
    ///
    /// Defaults to "gpt-3.5-turbo-instruct".
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL. Defaults to the public OpenAI endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum tokens in the response. Defaults to 60.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// HTTP request timeout in seconds. Defaults to 30.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl OracleConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo-instruct".into()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

const fn default_max_tokens() -> usize {
    DEFAULT_MAX_TOKENS
}

const fn default_timeout_secs() -> u64 {
    30
}
