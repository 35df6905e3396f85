use byda_persist::{Conversation, Message};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{ChatError, Result};

pub const DEFAULT_SERVER: &str = "http://localhost:5000";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateConversationBody<'a> {
    user_id: &'a str,
    title: &'a str,
    capability: &'a str,
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    content: &'a str,
    capability: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the conversation and message endpoints
pub struct ChatApi {
    http: Client,
    base_url: String,
}

impl ChatApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_conversations(&self, user_id: &str) -> Result<Vec<Conversation>> {
        let response = self
            .http
            .get(format!("{}/api/conversations", self.base_url))
            .query(&[("userId", user_id)])
            .send()
            .await?;

        decode(response).await
    }

    pub async fn create_conversation(
        &self,
        user_id: &str,
        title: &str,
        capability: &str,
    ) -> Result<Conversation> {
        let response = self
            .http
            .post(format!("{}/api/conversations", self.base_url))
            .json(&CreateConversationBody {
                user_id,
                title,
                capability,
            })
            .send()
            .await?;

        decode(response).await
    }

    pub async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        let response = self
            .http
            .get(format!(
                "{}/api/conversations/{}/messages",
                self.base_url, conversation_id
            ))
            .send()
            .await?;

        decode(response).await
    }

    /// Post a user message; the reply is the stored assistant message
    pub async fn send_message(
        &self,
        conversation_id: &str,
        content: &str,
        capability: &str,
    ) -> Result<Message> {
        let response = self
            .http
            .post(format!(
                "{}/api/conversations/{}/messages",
                self.base_url, conversation_id
            ))
            .json(&SendMessageBody {
                content,
                capability,
            })
            .send()
            .await?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        return Err(ChatError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}
