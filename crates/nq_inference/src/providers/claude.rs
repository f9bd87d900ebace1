use async_trait::async_trait;
use nq_core::{LlmProvider, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const MODEL: &str = "claude-3-5-sonnet-20241022";
const MAX_TOKENS_TO_SAMPLE: u32 = 512;
const API_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    prompt: String,
    max_tokens_to_sample: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    completion: String,
}

/// Human/Assistant-delimited text-completions binding for Anthropic.
pub struct ClaudeProvider {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl ClaudeProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: "https://api.anthropic.com".to_string(),
        }
    }

    fn wrap_prompt(prompt: &str) -> String {
        format!("\n\nHuman: {}\n\nAssistant:", prompt)
    }

    fn request_body(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: MODEL.to_string(),
            prompt: Self::wrap_prompt(prompt),
            max_tokens_to_sample: MAX_TOKENS_TO_SAMPLE,
        }
    }
}

impl fmt::Debug for ClaudeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaudeProvider")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl LlmProvider for ClaudeProvider {
    fn name(&self) -> &str {
        "Claude"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/v1/complete", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&Self::request_body(prompt))
            .send()
            .await?
            .error_for_status()?
            .json::<CompletionResponse>()
            .await?;

        Ok(response.completion)
    }
}
