mod conversation;
mod message;
mod user;

pub use conversation::{Conversation, NewConversation};
pub use message::{Message, MessageRole, NewMessage};
pub use user::{NewUser, User};
