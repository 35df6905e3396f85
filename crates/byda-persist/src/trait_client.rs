use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Conversation, Message, NewConversation, NewMessage, NewUser, User};

/// Trait for storage backends
///
/// Implementations provide CRUD operations over users, conversations and
/// messages. Ids and timestamps are assigned by the backend.
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    /// Insert or replace a user with a caller-chosen id
    async fn save_user(&self, user: User) -> Result<User>;

    /// Create a user with a generated id; usernames are unique
    async fn create_user(&self, user: NewUser) -> Result<User> {
        if self.get_user_by_username(&user.username).await?.is_some() {
            return Err(crate::PersistError::UsernameTaken(user.username));
        }
        self.save_user(user.into_user()).await
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    async fn create_conversation(&self, conversation: NewConversation) -> Result<Conversation>;

    async fn get_conversation(&self, id: &str) -> Result<Option<Conversation>>;

    /// Conversations owned by `user_id`, most recently updated first
    async fn list_conversations(&self, user_id: &str) -> Result<Vec<Conversation>>;

    /// Set `updated_at`; fails with `ConversationNotFound` for unknown ids
    async fn touch_conversation(&self, id: &str, at: DateTime<Utc>) -> Result<Conversation>;

    /// Append a message; the conversation must exist
    async fn create_message(&self, message: NewMessage) -> Result<Message>;

    /// Messages of a conversation in timestamp order
    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>>;
}
