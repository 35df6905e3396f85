use byda_llm::ProviderType;
use byda_types::{Capability, MessageMetadata};

use crate::detect::{self, Detector};
use crate::prompts;

/// Everything the generator needs to answer under one capability
#[derive(Debug)]
pub struct CapabilityProfile {
    pub capability: Capability,
    pub system_prompt: &'static str,
    pub max_tokens: u32,
    pub primary: ProviderType,
    pub fallback: Option<ProviderType>,
    pub has_code: Option<bool>,
    pub detector: Option<&'static Detector>,
}

static PROFILES: [CapabilityProfile; 8] = [
    CapabilityProfile {
        capability: Capability::Coding,
        system_prompt: prompts::CODING,
        max_tokens: 4000,
        primary: ProviderType::Anthropic,
        fallback: Some(ProviderType::OpenAI),
        has_code: Some(true),
        detector: Some(&detect::LANGUAGE),
    },
    CapabilityProfile {
        capability: Capability::WebDev,
        system_prompt: prompts::WEB_DEV,
        max_tokens: 4000,
        primary: ProviderType::OpenAI,
        fallback: None,
        has_code: Some(true),
        detector: Some(&detect::FRAMEWORK),
    },
    CapabilityProfile {
        capability: Capability::Automation,
        system_prompt: prompts::AUTOMATION,
        max_tokens: 3000,
        primary: ProviderType::Anthropic,
        fallback: Some(ProviderType::OpenAI),
        has_code: Some(true),
        detector: Some(&detect::AUTOMATION_TYPE),
    },
    CapabilityProfile {
        capability: Capability::AppDev,
        system_prompt: prompts::APP_DEV,
        max_tokens: 4000,
        primary: ProviderType::OpenAI,
        fallback: None,
        has_code: Some(true),
        detector: Some(&detect::PLATFORM),
    },
    CapabilityProfile {
        capability: Capability::DataAnalytics,
        system_prompt: prompts::DATA_ANALYTICS,
        max_tokens: 4000,
        primary: ProviderType::Anthropic,
        fallback: Some(ProviderType::OpenAI),
        has_code: Some(true),
        detector: Some(&detect::DATA_TYPE),
    },
    CapabilityProfile {
        capability: Capability::Music,
        system_prompt: prompts::MUSIC,
        max_tokens: 3000,
        primary: ProviderType::OpenAI,
        fallback: None,
        has_code: Some(true),
        detector: Some(&detect::MUSIC_TYPE),
    },
    CapabilityProfile {
        capability: Capability::Search,
        system_prompt: prompts::SEARCH,
        max_tokens: 3500,
        primary: ProviderType::Anthropic,
        fallback: Some(ProviderType::OpenAI),
        has_code: None,
        detector: Some(&detect::SEARCH_TYPE),
    },
    CapabilityProfile {
        capability: Capability::General,
        system_prompt: prompts::GENERAL,
        max_tokens: 3000,
        primary: ProviderType::OpenAI,
        fallback: None,
        has_code: None,
        detector: None,
    },
];

impl CapabilityProfile {
    pub fn for_capability(capability: Capability) -> &'static CapabilityProfile {
        PROFILES
            .iter()
            .find(|p| p.capability == capability)
            .unwrap_or(&PROFILES[PROFILES.len() - 1])
    }

    /// Metadata for a live answer to `message`
    pub fn metadata(&self, message: &str) -> MessageMetadata {
        let mut metadata = MessageMetadata::for_capability(self.capability.id());
        if let Some(has_code) = self.has_code {
            metadata = metadata.with_has_code(has_code);
        }
        if let Some(detector) = self.detector {
            metadata = metadata.with_tag(detector.key, detector.detect(message));
        }
        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_capability_has_a_profile() {
        for capability in Capability::ALL {
            assert_eq!(CapabilityProfile::for_capability(capability).capability, capability);
        }
    }

    #[test]
    fn test_fallback_pairs() {
        let with_fallback: Vec<Capability> = PROFILES
            .iter()
            .filter(|p| p.fallback.is_some())
            .map(|p| p.capability)
            .collect();

        assert_eq!(
            with_fallback,
            vec![
                Capability::Coding,
                Capability::Automation,
                Capability::DataAnalytics,
                Capability::Search
            ]
        );
        assert!(PROFILES
            .iter()
            .filter(|p| p.fallback.is_some())
            .all(|p| p.primary == ProviderType::Anthropic));
    }

    #[test]
    fn test_metadata() {
        let coding = CapabilityProfile::for_capability(Capability::Coding).metadata("rust please");
        assert_eq!(coding.capability.as_deref(), Some("coding"));
        assert_eq!(coding.has_code, Some(true));
        assert_eq!(coding.tag("language"), Some("rust"));

        let search = CapabilityProfile::for_capability(Capability::Search).metadata("research x");
        assert_eq!(search.has_code, None);
        assert_eq!(search.tag("searchType"), Some("research"));

        let general = CapabilityProfile::for_capability(Capability::General).metadata("hi");
        assert_eq!(general.capability.as_deref(), Some("general"));
        assert!(general.tags.is_empty());
    }
}
