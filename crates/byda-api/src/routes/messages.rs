use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use byda_persist::{Message, NewMessage};
use byda_transcript::{render_messages, MessageView};
use byda_types::{Capability, MessageMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub content: String,
    /// Capability to answer under; unknown or missing ids get the general handler
    #[serde(default)]
    pub capability: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub conversation_id: String,
    /// `user` or `assistant`
    pub role: String,
    pub content: String,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<MessageMetadata>,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            conversation_id: m.conversation_id,
            role: m.role.as_str().to_string(),
            content: m.content,
            metadata: m.metadata,
            timestamp: m.timestamp,
        }
    }
}

/// List messages of a conversation in timestamp order
#[utoipa::path(
    get,
    path = "/api/conversations/{id}/messages",
    params(
        ("id" = String, Path, description = "Conversation ID")
    ),
    responses(
        (status = 200, description = "List of messages", body = [MessageResponse])
    ),
    tag = "messages"
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let messages = state.persist.list_messages(&conversation_id).await?;

    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

/// Post a user message and get the assistant's reply
///
/// Persists the user message, generates a reply under the requested
/// capability, persists the reply and bumps the conversation's timestamp.
#[utoipa::path(
    post,
    path = "/api/conversations/{id}/messages",
    params(
        ("id" = String, Path, description = "Conversation ID")
    ),
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Assistant reply", body = MessageResponse),
        (status = 400, description = "Invalid message data"),
        (status = 404, description = "Conversation not found"),
        (status = 500, description = "Storage error")
    ),
    tag = "messages"
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected message body");
        ApiError::BadRequest("Invalid message data".to_string())
    })?;

    if state.persist.get_conversation(&conversation_id).await?.is_none() {
        return Err(ApiError::ConversationNotFound(conversation_id));
    }

    let capability = req
        .capability
        .as_deref()
        .unwrap_or(Capability::General.id());

    state
        .persist
        .create_message(NewMessage::user(&conversation_id, &req.content))
        .await?;

    let reply = state.generator.generate(&req.content, capability).await;

    let assistant = state
        .persist
        .create_message(NewMessage::assistant(
            &conversation_id,
            reply.content,
            reply.metadata,
        ))
        .await?;

    state
        .persist
        .touch_conversation(&conversation_id, Utc::now())
        .await?;

    tracing::info!(
        conversation_id = %conversation_id,
        capability,
        message_id = %assistant.id,
        "Assistant reply stored"
    );

    Ok(Json(assistant.into()))
}

/// Rendered display tree of a conversation
#[utoipa::path(
    get,
    path = "/api/conversations/{id}/transcript",
    params(
        ("id" = String, Path, description = "Conversation ID")
    ),
    responses(
        (status = 200, description = "Display tree, one view per message", body = [serde_json::Value]),
        (status = 404, description = "Conversation not found")
    ),
    tag = "messages"
)]
pub async fn get_transcript(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
) -> ApiResult<Json<Vec<MessageView>>> {
    if state.persist.get_conversation(&conversation_id).await?.is_none() {
        return Err(ApiError::ConversationNotFound(conversation_id));
    }

    let messages = state.persist.list_messages(&conversation_id).await?;
    Ok(Json(render_messages(&messages)))
}
