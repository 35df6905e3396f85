// Anthropic Messages API
// https://docs.anthropic.com/en/api/messages

mod client;
mod types;

pub use client::{AnthropicClient, ANTHROPIC_API_BASE, ANTHROPIC_VERSION};
pub use types::{AnthropicMessage, ContentBlock, MessagesRequest, MessagesResponse, Role, Usage};
