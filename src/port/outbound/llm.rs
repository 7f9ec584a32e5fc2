//! LLM completion port used as the decision oracle.

use async_trait::async_trait;

use crate::error::Result;

/// Client for large language model text completion.
///
/// Implementations wrap a specific provider and handle authentication and
/// response parsing. Request timeouts are the implementation's concern.
///
/// # Errors
///
/// The [`complete`](Self::complete) method returns an error for transport
/// failures, rejected credentials or non-success responses. Failures are
/// not retried.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request and return the generated text.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The input prompt to complete.
    /// * `max_tokens` - Upper bound on generated tokens.
    async fn complete(&self, prompt: &str, max_tokens: usize) -> Result<String>;
}
