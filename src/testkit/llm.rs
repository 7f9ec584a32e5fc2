//! Scripted oracle.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{OracleError, Result};
use crate::port::Llm;

/// LLM double with a fixed reply or failure that records every prompt.
#[derive(Debug)]
pub struct ScriptedLlm {
    outcome: std::result::Result<String, OracleError>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            outcome: Ok(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: OracleError) -> Self {
        Self {
            outcome: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, prompt: &str, _max_tokens: usize) -> Result<String> {
        self.prompts.lock().push(prompt.to_string());
        self.outcome.clone().map_err(Into::into)
    }
}
