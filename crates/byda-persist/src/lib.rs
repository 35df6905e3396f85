pub mod models;
pub mod error;
pub mod trait_client;
pub mod dbs;

pub use models::{Conversation, Message, MessageRole, NewConversation, NewMessage, NewUser, User};
pub use error::{PersistError, Result};
pub use trait_client::PersistenceClient;
pub use dbs::memory::InMemoryPersistenceClient;

#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoPersistenceClient;

/// Make sure the hardcoded demo user exists.
pub async fn seed_demo_user(client: &dyn PersistenceClient) -> Result<User> {
    if let Some(user) = client.get_user(byda_types::DEMO_USER_ID).await? {
        return Ok(user);
    }

    tracing::info!(user_id = byda_types::DEMO_USER_ID, "Seeding demo user");
    client.save_user(User::demo()).await
}
