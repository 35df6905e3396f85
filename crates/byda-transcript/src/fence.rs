use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

const FENCE_MARKER: &str = "```";

/// Label used when a fence has no language line
pub const DEFAULT_LANGUAGE: &str = "text";

const DEFAULT_ICON: &str = "fas fa-code text-gray-400";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Prose { text: String },
    Code(CodeBlock),
}

/// A fenced code span ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub language: String,
    pub code: String,
    /// Suggested download name, `example.<ext>`
    pub filename: String,
    pub icon: &'static str,
}

impl CodeBlock {
    /// Parse the inside of a fence: first line is the language label.
    fn from_fence_body(body: &str) -> Self {
        let (label, code) = body.split_once('\n').unwrap_or((body, ""));

        let language = match label.trim() {
            "" => DEFAULT_LANGUAGE.to_string(),
            label => label.to_string(),
        };
        let code = code
            .strip_suffix("\r\n")
            .or_else(|| code.strip_suffix('\n'))
            .unwrap_or(code);

        Self {
            filename: format!("example.{}", file_extension(&language)),
            icon: language_icon(&language),
            code: code.to_string(),
            language,
        }
    }
}

/// Split raw message content into prose and fenced-code segments.
///
/// An unterminated fence is left in the surrounding prose. Content without
/// any fence comes back as a single prose segment, untouched.
pub fn split_segments(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in FENCE.find_iter(content) {
        push_prose(&mut segments, &content[last..m.start()]);

        let fenced = m.as_str();
        let body = &fenced[FENCE_MARKER.len()..fenced.len() - FENCE_MARKER.len()];
        segments.push(Segment::Code(CodeBlock::from_fence_body(body)));

        last = m.end();
    }

    if last == 0 {
        return vec![Segment::Prose {
            text: content.to_string(),
        }];
    }

    push_prose(&mut segments, &content[last..]);
    segments
}

fn push_prose(segments: &mut Vec<Segment>, text: &str) {
    let text = text.trim_matches(|c| c == '\n' || c == '\r');
    if !text.trim().is_empty() {
        segments.push(Segment::Prose {
            text: text.to_string(),
        });
    }
}

pub fn file_extension(language: &str) -> &'static str {
    match language.to_lowercase().as_str() {
        "javascript" => "js",
        "typescript" => "ts",
        "python" => "py",
        "java" => "java",
        "cpp" | "c++" => "cpp",
        "html" => "html",
        "css" => "css",
        "json" => "json",
        "sql" => "sql",
        _ => "txt",
    }
}

pub fn language_icon(language: &str) -> &'static str {
    match language.to_lowercase().as_str() {
        "javascript" => "fab fa-js-square text-yellow-400",
        "typescript" => "fab fa-js-square text-blue-400",
        "python" => "fab fa-python text-yellow-400",
        "java" => "fab fa-java text-red-400",
        "html" => "fab fa-html5 text-orange-400",
        "css" => "fab fa-css3-alt text-blue-400",
        "react" => "fab fa-react text-blue-400",
        "node" => "fab fa-node-js text-green-400",
        _ => DEFAULT_ICON,
    }
}
