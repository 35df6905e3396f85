//! Canned replies used in demo mode and as the last-resort fallback.

use byda_types::{Capability, GeneratedResponse, MessageMetadata};

pub const DEMO_PROVIDER: &str = "byda-demo";

/// Lead-ins that mark a general-knowledge question
const GENERAL_QUESTION_PHRASES: [&str; 7] = [
    "what is",
    "what are",
    "explain",
    "define",
    "tell me about",
    "who is",
    "who are",
];

const CODING_FIBONACCI: &str = include_str!("../canned/coding_fibonacci.md");
const CODING: &str = include_str!("../canned/coding.md");
const WEB_DEV: &str = include_str!("../canned/web_dev.md");
const AUTOMATION: &str = include_str!("../canned/automation.md");
const APP_DEV: &str = include_str!("../canned/app_dev.md");
const DATA_ANALYTICS: &str = include_str!("../canned/data_analytics.md");
const MUSIC: &str = include_str!("../canned/music.md");
const SEARCH: &str = include_str!("../canned/search.md");
const GENERAL_PYTHON: &str = include_str!("../canned/general_python.md");
const GENERAL: &str = include_str!("../canned/general.md");

pub fn is_general_question(message: &str) -> bool {
    let message = message.to_lowercase();
    GENERAL_QUESTION_PHRASES
        .iter()
        .any(|phrase| message.contains(phrase))
}

/// Canned reply for `message` under `capability_id`.
///
/// General questions get the general answer whatever the capability;
/// unknown capability ids do too.
pub fn demo_response(message: &str, capability_id: &str) -> GeneratedResponse {
    if is_general_question(message) {
        return general(message);
    }

    match Capability::from_id(capability_id) {
        Some(Capability::Coding) => coding(message),
        Some(Capability::WebDev) => with_code(Capability::WebDev, WEB_DEV),
        Some(Capability::Automation) => with_code(Capability::Automation, AUTOMATION),
        Some(Capability::AppDev) => with_code(Capability::AppDev, APP_DEV),
        Some(Capability::DataAnalytics) => with_code(Capability::DataAnalytics, DATA_ANALYTICS),
        Some(Capability::Music) => with_code(Capability::Music, MUSIC),
        Some(Capability::Search) => GeneratedResponse::new(
            SEARCH,
            demo_metadata(Capability::Search).with_tag("searchType", "comprehensive"),
        ),
        Some(Capability::General) | None => general(message),
    }
}

fn demo_metadata(capability: Capability) -> MessageMetadata {
    MessageMetadata::for_capability(capability.id()).with_provider(DEMO_PROVIDER)
}

fn with_code(capability: Capability, content: &'static str) -> GeneratedResponse {
    GeneratedResponse::new(content, demo_metadata(capability).with_has_code(true))
}

fn coding(message: &str) -> GeneratedResponse {
    if message.to_lowercase().contains("fibonacci") {
        return GeneratedResponse::new(
            CODING_FIBONACCI,
            demo_metadata(Capability::Coding)
                .with_has_code(true)
                .with_tag("language", "python"),
        );
    }

    GeneratedResponse::new(CODING, demo_metadata(Capability::Coding).with_has_code(false))
}

fn general(message: &str) -> GeneratedResponse {
    if message.to_lowercase().contains("what is python") {
        return GeneratedResponse::new(
            GENERAL_PYTHON,
            demo_metadata(Capability::General).with_topic("python"),
        );
    }

    GeneratedResponse::new(GENERAL, demo_metadata(Capability::General))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_question_overrides_capability() {
        for capability in ["coding", "music", "search", "nope"] {
            let response = demo_response("Explain closures", capability);
            assert_eq!(response.metadata.capability.as_deref(), Some("general"));
            assert_eq!(response.metadata.provider.as_deref(), Some(DEMO_PROVIDER));
        }
    }

    #[test]
    fn test_what_is_python() {
        let response = demo_response("What is Python?", "coding");
        assert!(response.content.contains("Python"));
        assert!(response.content.contains("```python"));
        assert_eq!(response.metadata.capability.as_deref(), Some("general"));
        assert_eq!(response.metadata.topic.as_deref(), Some("python"));
    }

    #[test]
    fn test_fibonacci_sample() {
        let response = demo_response("write fibonacci", "coding");
        assert!(response.content.contains("```python"));
        assert!(response.content.contains("def fibonacci_matrix"));
        assert_eq!(response.metadata.has_code, Some(true));
        assert_eq!(response.metadata.tag("language"), Some("python"));
    }

    #[test]
    fn test_fibonacci_only_for_coding() {
        let response = demo_response("fibonacci tune", "music");
        assert_eq!(response.metadata.capability.as_deref(), Some("music"));
        assert!(!response.content.contains("```"));
    }

    #[test]
    fn test_generic_coding_reply_has_no_code() {
        let response = demo_response("sort a list", "coding");
        assert_eq!(response.metadata.has_code, Some(false));
        assert!(response.metadata.tag("language").is_none());
    }

    #[test]
    fn test_search_type() {
        let response = demo_response("find papers", "search");
        assert_eq!(response.metadata.tag("searchType"), Some("comprehensive"));
        assert_eq!(response.metadata.has_code, None);
    }

    #[test]
    fn test_every_capability_answers() {
        for capability in Capability::ALL {
            let response = demo_response("build something", capability.id());
            assert!(!response.content.is_empty());
            assert_eq!(response.metadata.capability.as_deref(), Some(capability.id()));
        }

        let unknown = demo_response("build something", "quantum");
        assert_eq!(unknown.metadata.capability.as_deref(), Some("general"));
    }
}
