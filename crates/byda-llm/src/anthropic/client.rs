// Anthropic-specific client implementation

use super::types::{AnthropicMessage, MessagesRequest, MessagesResponse, Role};
use crate::traits::{ChatClient, ChatRequest, ChatResponse, TokenUsage};
use crate::types::Message;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// The Messages API requires max_tokens on every call
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic client (HTTP direct, no SDK)
///
/// Differs from OpenAI in three ways:
/// - Auth header: `x-api-key` instead of `Authorization: Bearer`
/// - System prompt is a top-level field, not a message
/// - `max_tokens` is mandatory
pub struct AnthropicClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&api_key).context("Invalid API key format")?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: ANTHROPIC_API_BASE.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn build_messages_request(&self, request: ChatRequest) -> MessagesRequest {
        let system = request.system_prompt();

        let messages = request
            .messages
            .into_iter()
            .filter_map(|msg| match msg {
                Message::System { .. } => None,
                Message::Human { content } => Some(AnthropicMessage {
                    role: Role::User,
                    content: content.to_text(),
                }),
                Message::AI { content } => Some(AnthropicMessage {
                    role: Role::Assistant,
                    content: content.to_text(),
                }),
            })
            .collect();

        MessagesRequest {
            model: request.model,
            max_tokens: request.options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            messages,
            system,
            temperature: request.options.temperature,
        }
    }
}

#[async_trait]
impl ChatClient for AnthropicClient {
    fn provider(&self) -> &str {
        "anthropic"
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let payload = self.build_messages_request(request);

        let response = self
            .http_client
            .post(format!("{}/messages", self.base_url))
            .json(&payload)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Anthropic API error ({}): {}", status, error_text);
        }

        let raw: MessagesResponse = response
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(ChatResponse {
            content: raw.first_text().map(str::to_string),
            usage: raw.usage.as_ref().map(|u| TokenUsage {
                input_tokens: u.input_tokens,
                output_tokens: u.output_tokens,
                total_tokens: u.input_tokens + u.output_tokens,
            }),
            finish_reason: raw.stop_reason.clone(),
            raw: serde_json::to_value(&raw)?,
        })
    }
}
