//! Turns the backend's loosely structured summary text into renderable lines.
//!
//! The summary arrives as free-form text, usually one bullet per line with
//! `**bold**` headlines. [`format_summary`] drops blank lines, strips a single
//! leading `-`/`*` list marker and splits each line into plain and emphasized
//! segments. It is pure: the same input always yields the same lines.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of characters of line content that go into a render key.
pub const KEY_PREFIX_CHARS: usize = 20;

lazy_static! {
    static ref LIST_MARKER: Regex = Regex::new(r"^[-*]\s+").unwrap();
    static ref EMPHASIS: Regex = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderLine {
    /// Stable across re-renders while the line's position and content hold.
    pub key: String,
    pub segments: Vec<Segment>,
}

impl RenderLine {
    /// The line with emphasis markers removed.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

pub fn format_summary(raw: &str) -> Vec<RenderLine> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_list_marker)
        .enumerate()
        .map(|(index, line)| RenderLine {
            key: render_key(index, line),
            segments: split_emphasis(line),
        })
        .collect()
}

/// Removes one leading `-` or `*` followed by whitespace. A bare `-` with
/// nothing after it is left alone.
pub fn strip_list_marker(line: &str) -> &str {
    match LIST_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Splits `**text**` runs out of a line. Unterminated or empty `**` pairs
/// stay in the plain text around them.
pub fn split_emphasis(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in EMPHASIS.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::plain(&line[last..whole.start()]));
        }
        segments.push(Segment::emphasized(inner.as_str()));
        last = whole.end();
    }

    if last < line.len() {
        segments.push(Segment::plain(&line[last..]));
    }
    segments
}

pub fn render_key(index: usize, line: &str) -> String {
    let prefix: String = line.chars().take(KEY_PREFIX_CHARS).collect();
    format!("{}-{}", index, prefix)
}
