//! Display tree for a chat transcript.
//!
//! Rendering is a pure function of the stored messages: no I/O, no clocks.
//! The only time-dependent piece is [`CopyFeedback`], which takes `now` as an
//! argument.

pub mod copy;
pub mod fence;
pub mod inline;
pub mod text;
pub mod view;

pub use copy::{CopyFeedback, CopyState, COPY_RESET_AFTER};
pub use fence::{file_extension, language_icon, split_segments, CodeBlock, Segment};
pub use inline::{format_line, format_prose, Inline, Paragraph};
pub use text::to_plain_text;
pub use view::{render_message, render_messages, Alignment, Block, MessageBody, MessageView};
