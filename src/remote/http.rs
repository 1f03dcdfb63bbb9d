//! reqwest implementation of the remote call primitive.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use std::time::Duration;

use super::{RemoteCall, RemoteError, RemoteRequest, RemoteResponse};

/// HTTP client bound to one service root.
#[derive(Clone, Debug)]
pub struct HttpRemote {
    root: Url,
    client: Client,
}

impl HttpRemote {
    /// Create a client for `root_url`. A trailing slash is added when missing so
    /// relative endpoint paths resolve underneath the root.
    pub fn new(root_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let root = Self::normalize_root(root_url)?;
        let client = Client::builder()
            .user_agent(concat!("dbpanel/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        Ok(Self { root, client })
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    fn normalize_root(root_url: &str) -> Result<Url, RemoteError> {
        let trimmed = root_url.trim();
        let with_slash = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        };
        Url::parse(&with_slash).map_err(|e| RemoteError::InvalidUrl(format!("{}: {}", root_url, e)))
    }

    /// Resolve an endpoint path against the service root.
    pub fn url(&self, path: &str) -> Result<Url, RemoteError> {
        self.root
            .join(path)
            .map_err(|e| RemoteError::InvalidUrl(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl RemoteCall for HttpRemote {
    async fn call(&self, request: RemoteRequest) -> Result<RemoteResponse, RemoteError> {
        let url = self.url(&request.path)?;
        log::debug!("HTTP: {} {}", request.verb.as_str(), url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, request.expected.accept_header())
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let envelope = RemoteResponse::classify(content_type.as_deref(), body);
        if status.is_success() {
            Ok(envelope)
        } else {
            Err(RemoteError::Status {
                status: status.as_u16(),
                response: envelope,
            })
        }
    }

    async fn download(&self, path: &str) -> Result<Vec<u8>, RemoteError> {
        let url = self.url(path)?;
        log::debug!("HTTP: GET {} (download)", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                response: RemoteResponse::classify(content_type.as_deref(), body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
