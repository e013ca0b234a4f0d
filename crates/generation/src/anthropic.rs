//! Card generator backed by the Anthropic Messages API.
//!
//! One `POST /v1/messages` call per topic, no retries. Transport failures,
//! timeouts and non-2xx statuses become [`GenerationError::Service`]; a reply
//! that cannot be parsed into cards becomes [`GenerationError::Parse`].

use std::time::Duration;

use async_trait::async_trait;
use flashdeck_core::draft::{into_drafts, DraftCard};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::parse::parse_cards;
use crate::prompt::build_prompt;
use crate::{CardGenerator, DEFAULT_CARD_COUNT};

/// Value sent in the `anthropic-version` header.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Settings for [`AnthropicGenerator`].
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API credential. Generation fails with a service error when unset.
    pub api_key: Option<String>,
    /// Base URL without trailing slash, e.g. `https://api.anthropic.com`.
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Upper bound on cards returned per topic.
    pub card_count: usize,
    /// Upper bound on a single API call.
    pub timeout: Duration,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 2000,
            card_count: DEFAULT_CARD_COUNT,
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

/// HTTP client for the Anthropic Messages API.
pub struct AnthropicGenerator {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicGenerator {
    /// Build a generator with a client bounded by `config.timeout`.
    /// Fails with [`GenerationError::Service`] when `card_count` is zero.
    pub fn new(config: AnthropicConfig) -> Result<Self, GenerationError> {
        if config.card_count == 0 {
            return Err(GenerationError::Service(
                "card_count must be at least 1".to_string(),
            ));
        }
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Send the prompt and return the first text block of the reply.
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::Service("ANTHROPIC_API_KEY is not configured".into()))?;

        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationError::Service(format!(
                "Anthropic API error ({}): {body}",
                status.as_u16()
            )));
        }

        let reply: MessagesResponse = response.json().await?;
        reply
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| GenerationError::Service("reply contained no text block".into()))
    }
}

#[async_trait]
impl CardGenerator for AnthropicGenerator {
    async fn generate(&self, topic: &str) -> Result<Vec<DraftCard>, GenerationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GenerationError::EmptyTopic);
        }

        let prompt = build_prompt(topic, self.config.card_count);
        tracing::debug!(model = %self.config.model, card_count = self.config.card_count, "Requesting flashcards");

        let text = self.complete(&prompt).await?;
        let cards = parse_cards(&text, self.config.card_count)?;

        tracing::info!(count = cards.len(), "Generated flashcards");
        Ok(into_drafts(cards))
    }
}
