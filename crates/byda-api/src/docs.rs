use utoipa::OpenApi;

use crate::routes::{capabilities, conversations, health, messages};

#[derive(OpenApi)]
#[openapi(
    info(title = "Byda API", description = "Capability-routed chat service"),
    paths(
        health::health_check,
        capabilities::list_capabilities,
        conversations::create_conversation,
        conversations::list_conversations,
        messages::list_messages,
        messages::send_message,
        messages::get_transcript,
    ),
    components(schemas(
        health::HealthResponse,
        conversations::CreateConversationRequest,
        conversations::ConversationResponse,
        messages::SendMessageRequest,
        messages::MessageResponse,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "capabilities", description = "Capability catalog"),
        (name = "conversations", description = "Conversation records"),
        (name = "messages", description = "Messages and rendered transcripts"),
    )
)]
pub struct ApiDoc;
