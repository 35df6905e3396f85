use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open-ended metadata attached to a stored message.
///
/// The well-known fields are typed; detector output (`language`, `framework`,
/// `automationType`, ...) and anything else lands in `tags`, flattened into the
/// same JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_code: Option<bool>,

    /// Which provider answered, when it was not the capability's primary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,

    #[serde(flatten)]
    pub tags: Map<String, Value>,
}

impl MessageMetadata {
    pub fn for_capability(capability: impl Into<String>) -> Self {
        Self {
            capability: Some(capability.into()),
            ..Self::default()
        }
    }

    pub fn with_has_code(mut self, has_code: bool) -> Self {
        self.has_code = Some(has_code);
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), Value::String(value.into()));
        self
    }

    /// String value of a detector tag.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).and_then(Value::as_str)
    }

    /// True only when the error flag is present and set.
    pub fn is_error(&self) -> bool {
        self.error.unwrap_or(false)
    }
}

/// Output of the response generator: always displayable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedResponse {
    pub content: String,
    pub metadata: MessageMetadata,
}

impl GeneratedResponse {
    pub fn new(content: impl Into<String>, metadata: MessageMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_serializes_flat_camel_case() {
        let metadata = MessageMetadata::for_capability("automation")
            .with_has_code(true)
            .with_tag("automationType", "scheduling");

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(
            value,
            json!({
                "capability": "automation",
                "hasCode": true,
                "automationType": "scheduling"
            })
        );
    }

    #[test]
    fn test_metadata_accepts_unknown_fields() {
        let metadata: MessageMetadata = serde_json::from_value(json!({
            "capability": "coding",
            "error": true,
            "tokens": 42
        }))
        .unwrap();

        assert!(metadata.is_error());
        assert_eq!(metadata.tags.get("tokens"), Some(&json!(42)));
        assert_eq!(metadata.tag("tokens"), None);
    }

    #[test]
    fn test_missing_error_flag_is_not_an_error() {
        let metadata: MessageMetadata = serde_json::from_value(json!({})).unwrap();
        assert!(!metadata.is_error());
        assert_eq!(metadata, MessageMetadata::default());
    }
}
