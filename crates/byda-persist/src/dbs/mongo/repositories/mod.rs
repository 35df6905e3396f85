pub mod conversation;
pub mod message;
pub mod user;

pub use conversation::MongoConversationRepository;
pub use message::MongoMessageRepository;
pub use user::MongoUserRepository;
