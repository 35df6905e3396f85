use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};

use crate::dbs::mongo::models::MongoConversation;
use crate::error::Result;

#[derive(Clone)]
pub struct MongoConversationRepository {
    collection: Collection<MongoConversation>,
}

impl MongoConversationRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("conversations");
        Self { collection }
    }

    pub async fn insert(&self, conversation: &MongoConversation) -> Result<()> {
        self.collection.insert_one(conversation).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<MongoConversation>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Conversations for a user, newest activity first
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<MongoConversation>> {
        let conversations = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "updated_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(conversations)
    }

    /// Returns false when no document matched
    pub async fn set_updated_at(&self, id: &str, at: DateTime<Utc>) -> Result<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "updated_at": bson::DateTime::from_chrono(at) } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }
}
