use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use byda_llm::{ChatClient, ChatOptions, ChatRequest, Message, ProviderType};
use byda_types::{Capability, GeneratedResponse};

use crate::builder::ResponseGeneratorBuilder;
use crate::config::ResponseMode;
use crate::demo;
use crate::profile::CapabilityProfile;

/// Content used when a provider answers with nothing
pub const NO_RESPONSE: &str = "No response generated";

/// A provider client bound to the model it should be called with
#[derive(Clone)]
pub struct ProviderSlot {
    pub client: Arc<dyn ChatClient>,
    pub model: String,
}

/// Turns a message and capability id into a displayable answer.
///
/// Holds no per-call state; share it behind an `Arc`.
pub struct ResponseGenerator {
    mode: ResponseMode,
    providers: HashMap<ProviderType, ProviderSlot>,
}

impl ResponseGenerator {
    pub(crate) fn new(mode: ResponseMode, providers: HashMap<ProviderType, ProviderSlot>) -> Self {
        Self { mode, providers }
    }

    pub fn builder() -> ResponseGeneratorBuilder {
        ResponseGeneratorBuilder::new()
    }

    pub fn mode(&self) -> ResponseMode {
        self.mode
    }

    /// Always returns an answer: provider failures end in the canned reply.
    pub async fn generate(&self, message: &str, capability_id: &str) -> GeneratedResponse {
        if self.mode == ResponseMode::Demo {
            tracing::info!(capability = capability_id, "Using demo mode");
            return demo::demo_response(message, capability_id);
        }

        let capability = Capability::resolve(capability_id);
        match self.generate_live(message, capability).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    capability = capability_id,
                    error = %e,
                    "Provider call failed, falling back to demo response"
                );
                demo::demo_response(message, capability_id)
            }
        }
    }

    async fn generate_live(&self, message: &str, capability: Capability) -> Result<GeneratedResponse> {
        let profile = CapabilityProfile::for_capability(capability);

        match self.call(profile.primary, profile, message).await {
            Ok(content) => Ok(GeneratedResponse::new(content, profile.metadata(message))),
            Err(primary_err) => {
                let Some(fallback) = profile.fallback else {
                    return Err(primary_err);
                };

                tracing::warn!(
                    capability = %capability,
                    primary = profile.primary.as_str(),
                    fallback = fallback.as_str(),
                    error = %primary_err,
                    "Primary provider unavailable, trying fallback"
                );

                let content = self.call(fallback, profile, message).await?;
                Ok(GeneratedResponse::new(
                    content,
                    profile.metadata(message).with_provider(fallback.as_str()),
                ))
            }
        }
    }

    async fn call(
        &self,
        provider: ProviderType,
        profile: &CapabilityProfile,
        message: &str,
    ) -> Result<String> {
        let slot = self
            .providers
            .get(&provider)
            .ok_or_else(|| anyhow!("No client configured for provider {}", provider.as_str()))?;

        let request = ChatRequest::new(
            slot.model.clone(),
            vec![Message::system(profile.system_prompt), Message::human(message)],
        )
        .with_options(ChatOptions::new().max_tokens(profile.max_tokens));

        tracing::debug!(
            provider = provider.as_str(),
            model = %slot.model,
            max_tokens = profile.max_tokens,
            "Calling provider"
        );

        let response = slot.client.chat(request).await?;
        Ok(response
            .content
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| NO_RESPONSE.to_string()))
    }
}
