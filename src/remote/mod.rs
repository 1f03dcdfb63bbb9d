//! Remote call primitive for the database lifecycle service.
//!
//! Every operator action ends in exactly one [`RemoteCall::call`]. The future
//! resolves to either a [`RemoteResponse`] or a [`RemoteError`]; both carry
//! something the message surface can display.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod http;

pub use http::HttpRemote;

/// HTTP verb of a remote call. The service only exposes GET endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpVerb {
    Get,
}

impl HttpVerb {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
        }
    }
}

/// Content the caller expects back, sent as the request `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpectedContent {
    /// Display markup or text (database lifecycle endpoints).
    HtmlText,
    /// Plain text (backup, listing and restore endpoints).
    Text,
}

impl ExpectedContent {
    pub fn accept_header(self) -> &'static str {
        match self {
            ExpectedContent::HtmlText => "text/html, text/plain;q=0.9",
            ExpectedContent::Text => "text/plain",
        }
    }
}

/// A single request against the service root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    /// Path relative to the service root, including any query string.
    pub path: String,
    pub verb: HttpVerb,
    pub expected: ExpectedContent,
}

impl RemoteRequest {
    pub fn get(path: impl Into<String>, expected: ExpectedContent) -> Self {
        Self {
            path: path.into(),
            verb: HttpVerb::Get,
            expected,
        }
    }
}

impl fmt::Display for RemoteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb.as_str(), self.path)
    }
}

/// How a response body should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseKind {
    Text,
    Markup,
}

impl ResponseKind {
    /// Classify from a `Content-Type` header value.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.to_ascii_lowercase().contains("html") {
            ResponseKind::Markup
        } else {
            ResponseKind::Text
        }
    }

    /// Legacy classification by body signature, used when the server sends
    /// no content type.
    pub fn sniff(body: &str) -> Self {
        if body.contains("html") {
            ResponseKind::Markup
        } else {
            ResponseKind::Text
        }
    }
}

/// Typed response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub kind: ResponseKind,
    pub body: String,
}

impl RemoteResponse {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Text,
            body: body.into(),
        }
    }

    pub fn markup(body: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Markup,
            body: body.into(),
        }
    }

    /// Build an envelope from an optional `Content-Type` header and the body.
    ///
    /// The service labels plain messages `text/html` too, so markup needs both
    /// an html (or missing) content type and the body signature. A non-html
    /// content type always yields text.
    pub fn classify(content_type: Option<&str>, body: impl Into<String>) -> Self {
        let body = body.into();
        let kind = match content_type {
            Some(value) if !value.trim().is_empty() => match ResponseKind::from_content_type(value) {
                ResponseKind::Markup => ResponseKind::sniff(&body),
                ResponseKind::Text => ResponseKind::Text,
            },
            _ => ResponseKind::sniff(&body),
        };
        Self { kind, body }
    }
}

/// Failure of a remote call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The service answered with a non-success status.
    #[error("HTTP {status}: {}", .response.body)]
    Status { status: u16, response: RemoteResponse },

    /// Connection, timeout or body-read failure.
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl RemoteError {
    /// Response envelope carried by the error, if the server produced one.
    pub fn response(&self) -> Option<&RemoteResponse> {
        match self {
            RemoteError::Status { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// The transport every action goes through.
#[async_trait]
pub trait RemoteCall: Send + Sync {
    /// Perform one request. Exactly one of the two outcomes is produced.
    async fn call(&self, request: RemoteRequest) -> Result<RemoteResponse, RemoteError>;

    /// Fetch raw bytes (shard archive downloads).
    async fn download(&self, path: &str) -> Result<Vec<u8>, RemoteError>;
}
