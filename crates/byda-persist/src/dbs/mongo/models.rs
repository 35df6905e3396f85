use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use byda_types::MessageMetadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Conversation, Message, MessageRole, User};

/// MongoDB document for a conversation (uuid string `_id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoConversation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<String>,
    pub title: String,
    pub capability: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub conversation_id: String,
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadata: Option<MessageMetadata>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
    /// Insert order; breaks ties between millisecond timestamps
    #[serde(default)]
    pub seq: i64,
}

/// Counter document backing `MongoMessage::seq`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoCounter {
    #[serde(rename = "_id")]
    pub id: String,
    pub seq: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub password: String,
}

impl From<Conversation> for MongoConversation {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            title: c.title,
            capability: c.capability,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<MongoConversation> for Conversation {
    fn from(c: MongoConversation) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            title: c.title,
            capability: c.capability,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl MongoMessage {
    pub fn new(m: Message, seq: i64) -> Self {
        Self {
            id: m.id,
            conversation_id: m.conversation_id,
            role: m.role,
            content: m.content,
            metadata: m.metadata,
            timestamp: m.timestamp,
            seq,
        }
    }
}

impl From<MongoMessage> for Message {
    fn from(m: MongoMessage) -> Self {
        Self {
            id: m.id,
            conversation_id: m.conversation_id,
            role: m.role,
            content: m.content,
            metadata: m.metadata,
            timestamp: m.timestamp,
        }
    }
}

impl From<User> for MongoUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            password: u.password,
        }
    }
}

impl From<MongoUser> for User {
    fn from(u: MongoUser) -> Self {
        Self {
            id: u.id,
            username: u.username,
            password: u.password,
        }
    }
}
