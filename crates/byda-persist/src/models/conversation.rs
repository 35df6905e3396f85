use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored conversation; capability is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub user_id: Option<String>,
    pub title: String,
    pub capability: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields of a new conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConversation {
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    pub capability: String,
}

impl NewConversation {
    pub fn new(title: impl Into<String>, capability: impl Into<String>) -> Self {
        Self {
            user_id: None,
            title: title.into(),
            capability: capability.into(),
        }
    }

    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Assign id and timestamps
    pub fn into_conversation(self) -> Conversation {
        let now = Utc::now();
        Conversation {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: self.user_id,
            title: self.title,
            capability: self.capability,
            created_at: now,
            updated_at: now,
        }
    }
}
