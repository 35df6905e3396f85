use crate::fence::CodeBlock;
use crate::inline::{Inline, Paragraph};
use crate::view::{Alignment, Block, MessageBody, MessageView};

const USER_LABEL: &str = "you";
const ASSISTANT_LABEL: &str = "byda o.1";

/// Render a display tree for a terminal.
pub fn to_plain_text(views: &[MessageView]) -> String {
    let mut out = String::new();

    for (i, view) in views.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_view(&mut out, view);
    }
    out
}

fn write_view(out: &mut String, view: &MessageView) {
    let label = match view.align {
        Alignment::Right => USER_LABEL,
        Alignment::Left => ASSISTANT_LABEL,
    };

    match &view.body {
        MessageBody::Verbatim { text } => {
            out.push_str(&format!("{:>width$}\n", format!("[{}]", label), width = 40));
            for line in text.lines() {
                out.push_str(&format!("{:>width$}\n", line, width = 40));
            }
        }
        MessageBody::Error { text } => {
            out.push_str(&format!("[{}]\n! {}\n", label, text));
        }
        MessageBody::Formatted { blocks } => {
            out.push_str(&format!("[{}]\n", label));
            for block in blocks {
                match block {
                    Block::Prose { paragraphs } => write_paragraphs(out, paragraphs),
                    Block::Code(code) => write_code(out, code),
                }
            }
        }
    }
}

fn write_paragraphs(out: &mut String, paragraphs: &[Paragraph]) {
    for paragraph in paragraphs {
        if paragraph.bullet {
            out.push_str("    • ");
        }
        for span in &paragraph.spans {
            match span {
                Inline::Text(text) => out.push_str(text),
                Inline::Strong(text) => {
                    out.push('*');
                    out.push_str(text);
                    out.push('*');
                }
            }
        }
        out.push('\n');
    }
}

fn write_code(out: &mut String, code: &CodeBlock) {
    out.push_str(&format!("--- {} ({}) ---\n", code.filename, code.language));
    out.push_str(&code.code);
    if !code.code.is_empty() {
        out.push('\n');
    }
    out.push_str("---\n");
}
