use mongodb::{bson::doc, options::ReplaceOptions, Client, Collection};

use crate::dbs::mongo::models::MongoUser;
use crate::error::Result;

#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<MongoUser>,
}

impl MongoUserRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("users");
        Self { collection }
    }

    pub async fn upsert(&self, user: &MongoUser) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &user.id }, user)
            .with_options(ReplaceOptions::builder().upsert(true).build())
            .await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<MongoUser>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<MongoUser>> {
        Ok(self.collection.find_one(doc! { "username": username }).await?)
    }
}
