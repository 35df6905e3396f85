use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Client, Collection,
};

use crate::dbs::mongo::models::{MongoCounter, MongoMessage};
use crate::error::{PersistError, Result};
use crate::models::Message;

const MESSAGE_SEQUENCE: &str = "messages";

/// Oldest first; `seq` orders messages stored within the same millisecond
pub(crate) fn message_order() -> Document {
    doc! { "timestamp": 1, "seq": 1 }
}

#[derive(Clone)]
pub struct MongoMessageRepository {
    collection: Collection<MongoMessage>,
    counters: Collection<MongoCounter>,
}

impl MongoMessageRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let db = client.database(db_name);
        Self {
            collection: db.collection("messages"),
            counters: db.collection("counters"),
        }
    }

    async fn next_seq(&self) -> Result<i64> {
        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": MESSAGE_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(
                FindOneAndUpdateOptions::builder()
                    .upsert(true)
                    .return_document(ReturnDocument::After)
                    .build(),
            )
            .await?;

        counter
            .map(|c| c.seq)
            .ok_or(PersistError::SequenceUnavailable)
    }

    pub async fn insert(&self, message: Message) -> Result<()> {
        let seq = self.next_seq().await?;
        self.collection
            .insert_one(MongoMessage::new(message, seq))
            .await?;
        Ok(())
    }

    pub async fn list_for_conversation(&self, conversation_id: &str) -> Result<Vec<MongoMessage>> {
        let messages = self
            .collection
            .find(doc! { "conversation_id": conversation_id })
            .sort(message_order())
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }
}
