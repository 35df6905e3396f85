use byda_llm::ProviderType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Substituted when no credential is set; providers reject it and the
/// generator falls through to the demo reply.
pub const PLACEHOLDER_API_KEY: &str = "default_key";

/// Provider-availability policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Skip provider calls and answer from the canned set
    #[default]
    Demo,
    /// Call the hosted providers
    Live,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub mode: ResponseMode,
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mode: ResponseMode::Demo,
            anthropic_model: default_anthropic_model(),
            openai_model: default_openai_model(),
        }
    }
}

impl GeneratorConfig {
    pub fn model_for(&self, provider: ProviderType) -> &str {
        match provider {
            ProviderType::OpenAI => &self.openai_model,
            ProviderType::Anthropic => &self.anthropic_model,
        }
    }
}

fn default_anthropic_model() -> String {
    DEFAULT_ANTHROPIC_MODEL.to_string()
}

fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.to_string()
}

/// Read a provider credential, trying the primary variable then its alias.
pub fn api_key_from_env(provider: ProviderType) -> String {
    let (primary, alias) = match provider {
        ProviderType::OpenAI => ("OPENAI_API_KEY", "OPENAI_KEY"),
        ProviderType::Anthropic => ("ANTHROPIC_API_KEY", "ANTHROPIC_KEY"),
    };

    std::env::var(primary)
        .or_else(|_| std::env::var(alias))
        .ok()
        .filter(|key| !key.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.mode, ResponseMode::Demo);
        assert_eq!(config.model_for(ProviderType::Anthropic), DEFAULT_ANTHROPIC_MODEL);
        assert_eq!(config.model_for(ProviderType::OpenAI), DEFAULT_OPENAI_MODEL);
    }

    #[test]
    fn test_mode_from_json() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"mode": "live"}"#).unwrap();
        assert_eq!(config.mode, ResponseMode::Live);
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
    }
}
