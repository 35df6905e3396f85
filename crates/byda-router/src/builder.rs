use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use byda_llm::{ChatClient, ClientFactory, ProviderConfig, ProviderType};

use crate::config::{api_key_from_env, GeneratorConfig, ResponseMode};
use crate::generator::{ProviderSlot, ResponseGenerator};

/// Builder for constructing a ResponseGenerator
pub struct ResponseGeneratorBuilder {
    mode: ResponseMode,
    providers: HashMap<ProviderType, ProviderSlot>,
}

impl ResponseGeneratorBuilder {
    pub fn new() -> Self {
        Self {
            mode: ResponseMode::default(),
            providers: HashMap::new(),
        }
    }

    pub fn mode(mut self, mode: ResponseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Register the client answering for `provider`
    pub fn provider(
        mut self,
        provider: ProviderType,
        client: Arc<dyn ChatClient>,
        model: impl Into<String>,
    ) -> Self {
        self.providers.insert(
            provider,
            ProviderSlot {
                client,
                model: model.into(),
            },
        );
        self
    }

    /// Mode from `config`, both providers with credentials from the environment
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let mut builder = Self::new().mode(config.mode);

        for provider in [ProviderType::Anthropic, ProviderType::OpenAI] {
            let key = api_key_from_env(provider);
            let provider_config = match provider {
                ProviderType::Anthropic => ProviderConfig::anthropic(key),
                ProviderType::OpenAI => ProviderConfig::openai(key),
            };
            let client = ClientFactory::create_chat_client(provider_config)?;
            builder = builder.provider(provider, client, config.model_for(provider));
        }

        Ok(builder)
    }

    pub fn build(self) -> ResponseGenerator {
        ResponseGenerator::new(self.mode, self.providers)
    }
}

impl Default for ResponseGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
