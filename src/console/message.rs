//! Message renderer: turns any action outcome into the single display surface.
//!
//! The surface holds exactly one message. Every render replaces the previous
//! content; nothing is appended or queued.

use crate::remote::{RemoteError, RemoteResponse, ResponseKind};
use std::fmt;

/// Anything an action can hand to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A response-like object with a textual body.
    Response(RemoteResponse),
    /// A locally authored string.
    Text(String),
    /// String conversion of an arbitrary value.
    Other(String),
}

impl Payload {
    pub fn text(message: impl Into<String>) -> Self {
        Payload::Text(message.into())
    }

    pub fn other(value: &impl fmt::Display) -> Self {
        Payload::Other(value.to_string())
    }
}

impl From<RemoteResponse> for Payload {
    fn from(response: RemoteResponse) -> Self {
        Payload::Response(response)
    }
}

impl From<RemoteError> for Payload {
    fn from(error: RemoteError) -> Self {
        match error {
            RemoteError::Status { response, .. } => Payload::Response(response),
            other => Payload::other(&other),
        }
    }
}

/// What the surface currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Raw markup, presented as formatted content.
    Markup(String),
    /// Literal text, shown exactly as received.
    Text(String),
}

impl Rendered {
    /// Apply the rendering rules to a payload.
    pub fn from_payload(payload: Payload) -> Self {
        match payload {
            Payload::Response(response) => match response.kind {
                ResponseKind::Markup => Rendered::Markup(response.body),
                ResponseKind::Text => Rendered::Text(response.body),
            },
            Payload::Text(text) | Payload::Other(text) => Rendered::Text(text),
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, Rendered::Markup(_))
    }

    /// The stored content, before any markup conversion.
    pub fn raw(&self) -> &str {
        match self {
            Rendered::Markup(body) | Rendered::Text(body) => body,
        }
    }

    /// Lines for a terminal: markup is flattened to text, plain text is kept
    /// verbatim.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Rendered::Markup(body) => markup_to_lines(body),
            Rendered::Text(body) => body.lines().map(str::to_string).collect(),
        }
    }
}

/// The single display surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBox {
    current: Option<Rendered>,
}

impl MessageBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a payload, replacing whatever was shown before.
    pub fn show(&mut self, payload: impl Into<Payload>) -> &Rendered {
        self.current.insert(Rendered::from_payload(payload.into()))
    }

    pub fn current(&self) -> Option<&Rendered> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl From<&str> for Payload {
    fn from(message: &str) -> Self {
        Payload::Text(message.to_string())
    }
}

impl From<String> for Payload {
    fn from(message: String) -> Self {
        Payload::Text(message)
    }
}

const LINE_BREAK_TAGS: [&str; 10] = ["br", "/p", "p", "/tr", "/div", "/li", "/h1", "/h2", "/h3", "/table"];

/// Flatten markup into display lines. Tags that end a block become line
/// breaks, every other tag is dropped, and the common entities are decoded.
pub fn markup_to_lines(markup: &str) -> Vec<String> {
    let mut text = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) => {
                let tag = after[..close].trim().trim_end_matches('/').trim();
                let name = tag
                    .split(|c: char| c.is_whitespace())
                    .next()
                    .unwrap_or_default()
                    .to_ascii_lowercase();
                if LINE_BREAK_TAGS.contains(&name.as_str()) {
                    text.push('\n');
                } else if name == "/td" || name == "/th" {
                    text.push(' ');
                }
                rest = &after[close + 1..];
            }
            None => {
                // Unterminated tag: keep the remainder as text.
                text.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    text.push_str(rest);

    decode_entities(&text)
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
