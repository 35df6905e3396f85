use byda_persist::{Message, MessageRole};
use serde::Serialize;

use crate::fence::{split_segments, CodeBlock, Segment};
use crate::inline::{format_prose, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Prose { paragraphs: Vec<Paragraph> },
    Code(CodeBlock),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageBody {
    /// User content, shown verbatim
    Verbatim { text: String },
    /// Assistant reply flagged as an error; not parsed
    Error { text: String },
    Formatted { blocks: Vec<Block> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: String,
    pub role: MessageRole,
    pub align: Alignment,
    pub body: MessageBody,
    /// Text placed on the clipboard by the whole-message copy button
    pub copy_text: String,
}

pub fn render_messages(messages: &[Message]) -> Vec<MessageView> {
    messages.iter().map(render_message).collect()
}

pub fn render_message(message: &Message) -> MessageView {
    let (align, body) = match message.role {
        MessageRole::User => (
            Alignment::Right,
            MessageBody::Verbatim {
                text: message.content.clone(),
            },
        ),
        MessageRole::Assistant => {
            let is_error = message
                .metadata
                .as_ref()
                .is_some_and(|metadata| metadata.is_error());

            let body = if is_error {
                MessageBody::Error {
                    text: message.content.clone(),
                }
            } else {
                MessageBody::Formatted {
                    blocks: format_blocks(&message.content),
                }
            };
            (Alignment::Left, body)
        }
    };

    MessageView {
        id: message.id.clone(),
        role: message.role,
        align,
        body,
        copy_text: message.content.clone(),
    }
}

fn format_blocks(content: &str) -> Vec<Block> {
    split_segments(content)
        .into_iter()
        .map(|segment| match segment {
            Segment::Prose { text } => Block::Prose {
                paragraphs: format_prose(&text),
            },
            Segment::Code(block) => Block::Code(block),
        })
        .collect()
}
