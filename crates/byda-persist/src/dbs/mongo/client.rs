use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::Client;

use crate::dbs::mongo::models::{MongoConversation, MongoUser};
use crate::dbs::mongo::repositories::{
    MongoConversationRepository, MongoMessageRepository, MongoUserRepository,
};
use crate::error::{PersistError, Result};
use crate::models::{Conversation, Message, NewConversation, NewMessage, User};
use crate::trait_client::PersistenceClient;

pub struct MongoPersistenceClient {
    user_repo: MongoUserRepository,
    conversation_repo: MongoConversationRepository,
    message_repo: MongoMessageRepository,
}

impl MongoPersistenceClient {
    /// Connect to MongoDB and create client
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        tracing::info!(database, "Connected to MongoDB");

        Ok(Self {
            user_repo: MongoUserRepository::new(&client, database),
            conversation_repo: MongoConversationRepository::new(&client, database),
            message_repo: MongoMessageRepository::new(&client, database),
        })
    }
}

#[async_trait]
impl PersistenceClient for MongoPersistenceClient {
    async fn save_user(&self, user: User) -> Result<User> {
        self.user_repo.upsert(&MongoUser::from(user.clone())).await?;
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self.user_repo.find_by_id(id).await?.map(Into::into))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.user_repo.find_by_username(username).await?.map(Into::into))
    }

    async fn create_conversation(&self, conversation: NewConversation) -> Result<Conversation> {
        let conversation = conversation.into_conversation();
        self.conversation_repo
            .insert(&MongoConversation::from(conversation.clone()))
            .await?;
        Ok(conversation)
    }

    async fn get_conversation(&self, id: &str) -> Result<Option<Conversation>> {
        Ok(self.conversation_repo.find_by_id(id).await?.map(Into::into))
    }

    async fn list_conversations(&self, user_id: &str) -> Result<Vec<Conversation>> {
        let conversations = self.conversation_repo.list_for_user(user_id).await?;
        Ok(conversations.into_iter().map(Into::into).collect())
    }

    async fn touch_conversation(&self, id: &str, at: DateTime<Utc>) -> Result<Conversation> {
        if !self.conversation_repo.set_updated_at(id, at).await? {
            return Err(PersistError::ConversationNotFound(id.to_string()));
        }

        self.get_conversation(id)
            .await?
            .ok_or_else(|| PersistError::ConversationNotFound(id.to_string()))
    }

    async fn create_message(&self, message: NewMessage) -> Result<Message> {
        if self
            .conversation_repo
            .find_by_id(&message.conversation_id)
            .await?
            .is_none()
        {
            return Err(PersistError::ConversationNotFound(message.conversation_id));
        }

        let message = message.into_message();
        self.message_repo.insert(message.clone()).await?;
        Ok(message)
    }

    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        let messages = self.message_repo.list_for_conversation(conversation_id).await?;
        Ok(messages.into_iter().map(Into::into).collect())
    }
}
