use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::{PersistError, Result};
use crate::models::{Conversation, Message, NewConversation, NewMessage, User};
use crate::trait_client::PersistenceClient;

#[derive(Default)]
struct MemoryState {
    users: HashMap<String, User>,
    conversations: HashMap<String, Conversation>,
    /// Insertion order doubles as the tie-break for equal timestamps
    messages: Vec<Message>,
}

/// Process-local storage; everything is lost on restart
#[derive(Default)]
pub struct InMemoryPersistenceClient {
    state: RwLock<MemoryState>,
}

impl InMemoryPersistenceClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersistenceClient for InMemoryPersistenceClient {
    async fn save_user(&self, user: User) -> Result<User> {
        let mut state = self.state.write().await;
        state.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self.state.read().await.users.get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_conversation(&self, conversation: NewConversation) -> Result<Conversation> {
        let conversation = conversation.into_conversation();
        let mut state = self.state.write().await;
        state
            .conversations
            .insert(conversation.id.clone(), conversation.clone());

        tracing::debug!(conversation_id = %conversation.id, "Conversation created");
        Ok(conversation)
    }

    async fn get_conversation(&self, id: &str) -> Result<Option<Conversation>> {
        Ok(self.state.read().await.conversations.get(id).cloned())
    }

    async fn list_conversations(&self, user_id: &str) -> Result<Vec<Conversation>> {
        let state = self.state.read().await;
        let mut conversations: Vec<Conversation> = state
            .conversations
            .values()
            .filter(|c| c.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();

        conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(conversations)
    }

    async fn touch_conversation(&self, id: &str, at: DateTime<Utc>) -> Result<Conversation> {
        let mut state = self.state.write().await;
        let conversation = state
            .conversations
            .get_mut(id)
            .ok_or_else(|| PersistError::ConversationNotFound(id.to_string()))?;

        conversation.updated_at = at;
        Ok(conversation.clone())
    }

    async fn create_message(&self, message: NewMessage) -> Result<Message> {
        let mut state = self.state.write().await;
        if !state.conversations.contains_key(&message.conversation_id) {
            return Err(PersistError::ConversationNotFound(message.conversation_id));
        }

        let message = message.into_message();
        state.messages.push(message.clone());
        Ok(message)
    }

    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        let state = self.state.read().await;
        let mut messages: Vec<Message> = state
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect();

        // Stable sort keeps insertion order for identical timestamps
        messages.sort_by_key(|m| m.timestamp);
        Ok(messages)
    }
}
