use byda_persist::Conversation;
use byda_transcript::{render_messages, MessageView};

use crate::api::ChatApi;
use crate::error::Result;

/// Characters of the first message kept in a conversation title
pub const TITLE_LIMIT: usize = 50;

/// Title derived from the message that opens a conversation.
pub fn conversation_title(content: &str) -> String {
    if content.chars().count() > TITLE_LIMIT {
        let head: String = content.chars().take(TITLE_LIMIT).collect();
        format!("{}...", head)
    } else {
        content.to_string()
    }
}

/// One user's chat against a server.
///
/// Every send opens a new conversation, posts the message to it and
/// re-fetches the stored list for display.
pub struct ChatSession {
    api: ChatApi,
    user_id: String,
    current: Option<Conversation>,
}

impl ChatSession {
    pub fn new(api: ChatApi, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            current: None,
        }
    }

    /// Conversation opened by the last successful send
    pub fn conversation(&self) -> Option<&Conversation> {
        self.current.as_ref()
    }

    /// Returns `None` without touching the server when `content` is blank.
    pub async fn send(&mut self, content: &str, capability: &str) -> Result<Option<Vec<MessageView>>> {
        let content = content.trim();
        if content.is_empty() {
            return Ok(None);
        }

        let conversation = self
            .api
            .create_conversation(&self.user_id, &conversation_title(content), capability)
            .await?;
        tracing::debug!(conversation_id = %conversation.id, capability, "Conversation created");

        self.api
            .send_message(&conversation.id, content, capability)
            .await?;

        let messages = self.api.list_messages(&conversation.id).await?;
        self.current = Some(conversation);

        Ok(Some(render_messages(&messages)))
    }
}
