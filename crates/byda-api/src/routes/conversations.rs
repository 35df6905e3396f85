use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use byda_persist::{Conversation, NewConversation};
use byda_types::{is_catalog_id, DEMO_USER_ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

pub const INVALID_CONVERSATION: &str = "Invalid conversation data";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    /// Must be one of the catalog ids
    pub capability: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub id: String,
    pub user_id: Option<String>,
    pub title: String,
    pub capability: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationResponse {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            title: c.title,
            capability: c.capability,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListConversationsQuery {
    /// Owner to list for; defaults to the demo user
    pub user_id: Option<String>,
}

/// Create a new conversation
#[utoipa::path(
    post,
    path = "/api/conversations",
    request_body = CreateConversationRequest,
    responses(
        (status = 200, description = "Conversation created", body = ConversationResponse),
        (status = 400, description = "Invalid conversation data")
    ),
    tag = "conversations"
)]
pub async fn create_conversation(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateConversationRequest>, JsonRejection>,
) -> ApiResult<Json<ConversationResponse>> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected conversation body");
        ApiError::BadRequest(INVALID_CONVERSATION.to_string())
    })?;

    if !is_catalog_id(&req.capability) {
        tracing::debug!(capability = %req.capability, "Unknown capability");
        return Err(ApiError::BadRequest(INVALID_CONVERSATION.to_string()));
    }

    let conversation = state
        .persist
        .create_conversation(NewConversation {
            user_id: req.user_id,
            title: req.title,
            capability: req.capability,
        })
        .await?;

    tracing::info!(
        conversation_id = %conversation.id,
        capability = %conversation.capability,
        "Conversation created"
    );

    Ok(Json(conversation.into()))
}

/// List a user's conversations, most recently updated first
#[utoipa::path(
    get,
    path = "/api/conversations",
    params(ListConversationsQuery),
    responses(
        (status = 200, description = "List of conversations", body = [ConversationResponse])
    ),
    tag = "conversations"
)]
pub async fn list_conversations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListConversationsQuery>,
) -> ApiResult<Json<Vec<ConversationResponse>>> {
    // An empty `userId` means the demo user too
    let user_id = query
        .user_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .unwrap_or(DEMO_USER_ID);

    let conversations = state.persist.list_conversations(user_id).await?;

    Ok(Json(conversations.into_iter().map(Into::into).collect()))
}
