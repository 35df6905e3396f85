use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static STRONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*.*?\*\*").unwrap());

const BULLET_MARKER: &str = "• ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Strong(String),
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text) | Inline::Strong(text) => text,
        }
    }
}

/// One line of prose
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Line started with a literal bullet marker; shown indented
    pub bullet: bool,
    pub spans: Vec<Inline>,
}

impl Paragraph {
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Split a prose segment into one paragraph per line.
pub fn format_prose(prose: &str) -> Vec<Paragraph> {
    prose.split('\n').map(format_line).collect()
}

/// Apply `**strong**` emphasis and bullet detection to a single line.
pub fn format_line(line: &str) -> Paragraph {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (bullet, line) = match line.strip_prefix(BULLET_MARKER) {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let mut spans = Vec::new();
    let mut last = 0;

    for m in STRONG.find_iter(line) {
        push_plain(&mut spans, &line[last..m.start()]);
        let strong = m.as_str();
        spans.push(Inline::Strong(strong[2..strong.len() - 2].to_string()));
        last = m.end();
    }
    push_plain(&mut spans, &line[last..]);

    Paragraph { bullet, spans }
}

fn push_plain(spans: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        spans.push(Inline::Text(text.to_string()));
    }
}
