// Configuration layer for provider-agnostic client creation

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::traits::ChatClient;

/// Type of LLM provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    OpenAI,
    Anthropic,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::OpenAI => "openai",
            ProviderType::Anthropic => "anthropic",
        }
    }
}

/// Connection settings shared by both providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub api_key: String,
    /// Base URL override; each client falls back to its public endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Provider-specific configuration details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderDetails {
    OpenAI(ApiConfig),
    Anthropic(ApiConfig),
}

/// Complete provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(flatten)]
    pub details: ProviderDetails,
}

impl ProviderConfig {
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            details: ProviderDetails::OpenAI(ApiConfig::new(api_key)),
        }
    }

    pub fn anthropic(api_key: impl Into<String>) -> Self {
        Self {
            details: ProviderDetails::Anthropic(ApiConfig::new(api_key)),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        match &mut self.details {
            ProviderDetails::OpenAI(api) | ProviderDetails::Anthropic(api) => {
                api.base_url = Some(base_url);
            }
        }
        self
    }

    pub fn provider_type(&self) -> ProviderType {
        match self.details {
            ProviderDetails::OpenAI(_) => ProviderType::OpenAI,
            ProviderDetails::Anthropic(_) => ProviderType::Anthropic,
        }
    }
}

/// Factory for creating chat clients from configuration
pub struct ClientFactory;

impl ClientFactory {
    pub fn create_chat_client(config: ProviderConfig) -> Result<Arc<dyn ChatClient>> {
        match config.details {
            ProviderDetails::OpenAI(api) => {
                let mut client = crate::openai::OpenAIClient::new(api.api_key)?;
                if let Some(base_url) = api.base_url {
                    client = client.with_base_url(base_url);
                }
                Ok(Arc::new(client))
            }
            ProviderDetails::Anthropic(api) => {
                let mut client = crate::anthropic::AnthropicClient::new(api.api_key)?;
                if let Some(base_url) = api.base_url {
                    client = client.with_base_url(base_url);
                }
                Ok(Arc::new(client))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_config() {
        let config = ProviderConfig::openai("test-key");
        assert_eq!(config.provider_type(), ProviderType::OpenAI);
    }

    #[test]
    fn test_anthropic_config_with_base_url() {
        let config = ProviderConfig::anthropic("test-key").with_base_url("http://localhost:9999");
        assert_eq!(config.provider_type(), ProviderType::Anthropic);

        match config.details {
            ProviderDetails::Anthropic(api) => {
                assert_eq!(api.base_url.as_deref(), Some("http://localhost:9999"));
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ProviderConfig::anthropic("test-key");

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"type\":\"anthropic\""));
        let deserialized: ProviderConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.provider_type(), deserialized.provider_type());
    }

    #[test]
    fn test_factory_reports_provider() {
        let client = ClientFactory::create_chat_client(ProviderConfig::anthropic("k")).unwrap();
        assert_eq!(client.provider(), "anthropic");

        let client = ClientFactory::create_chat_client(ProviderConfig::openai("k")).unwrap();
        assert_eq!(client.provider(), "openai");
    }
}
