//! OpenAI LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for the OpenAI text
//! completions API, which the oracle strategy uses to answer `Y` or `N`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, OracleError, Result};
use crate::port::outbound::llm::Llm;

/// Default OpenAI API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Path of the text completions endpoint.
const COMPLETIONS_PATH: &str = "/v1/completions";

/// OpenAI API client.
#[derive(Debug)]
pub struct OpenAi {
    /// HTTP client for API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Model identifier (e.g., "gpt-3.5-turbo-instruct").
    model: String,
    /// Base URL, overridable for proxies and tests.
    base_url: String,
}

impl OpenAi {
    /// Create a new OpenAI client with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `OPENAI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env(
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            Error::Config(ConfigError::MissingField {
                field: "OPENAI_API_KEY",
            })
        })?;
        Self::new(api_key, model, base_url, timeout)
    }

    fn endpoint(&self) -> String {
        format!("{}{COMPLETIONS_PATH}", self.base_url)
    }
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: usize,
}

#[derive(Deserialize)]
struct Response {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    text: String,
}

#[async_trait]
impl Llm for OpenAi {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, prompt: &str, max_tokens: usize) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(OracleError::EmptyPrompt.into());
        }

        let request = Request {
            model: &self.model,
            prompt,
            max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(OracleError::Unauthorized {
                status: status.as_u16(),
            }
            .into());
        }
        if !status.is_success() {
            return Err(OracleError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.json::<Response>().await?;
        body.choices
            .into_iter()
            .next()
            .map(|c| c.text.trim().to_string())
            .ok_or_else(|| OracleError::EmptyCompletion.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = Request {
            model: "gpt-3.5-turbo-instruct",
            prompt: "100N,150Y,200",
            max_tokens: 60,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-3.5-turbo-instruct");
        assert_eq!(json["prompt"], "100N,150Y,200");
        assert_eq!(json["max_tokens"], 60);
    }

    #[test]
    fn test_response_deserialization_single_choice() {
        let json = r#"{
            "id": "cmpl-123",
            "object": "text_completion",
            "created": 1677652288,
            "model": "gpt-3.5-turbo-instruct",
            "choices": [{
                "text": "\nY",
                "index": 0,
                "logprobs": null,
                "finish_reason": "stop"
            }]
        }"#;

        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].text, "\nY");
    }

    #[test]
    fn test_malformed_response_missing_choices() {
        let json = r#"{"id": "cmpl-123", "object": "text_completion"}"#;
        let result: std::result::Result<Response, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = OpenAi::new(
            "key",
            "model",
            "http://localhost:8080/",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/completions");
        assert_eq!(client.name(), "openai");
    }

    #[test]
    fn test_default_base_url_is_https() {
        assert!(DEFAULT_BASE_URL.starts_with("https://"));
        assert!(DEFAULT_BASE_URL.contains("openai.com"));
    }

    #[tokio::test]
    async fn test_empty_prompt_is_refused_without_request() {
        let client =
            OpenAi::new("key", "model", "http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let err = client.complete("  ", 60).await.unwrap_err();
        assert!(matches!(err, Error::Oracle(OracleError::EmptyPrompt)));
    }
}

/// Integration tests that require real API access.
/// Run with: `cargo test --features integration-tests -- --ignored`
#[cfg(all(test, feature = "integration-tests"))]
mod integration_tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires OPENAI_API_KEY and network access"]
    async fn test_single_token_answer() {
        let client = match OpenAi::from_env(
            "gpt-3.5-turbo-instruct",
            DEFAULT_BASE_URL,
            Duration::from_secs(30),
        ) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Skipping OpenAI integration test: {e}");
                return;
            }
        };

        let reply = client
            .complete("Answer with the single letter Y and nothing else.", 5)
            .await
            .expect("API call failed");
        assert!(!reply.is_empty());
    }
}
