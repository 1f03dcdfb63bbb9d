//! Backup-set resolution: from a listing outcome to seven download links.

use crate::console::shard::Shard;
use crate::remote::RemoteError;
use std::fmt;

/// URL attribute of a cleared link.
pub const PLACEHOLDER_URL: &str = "#";

/// Base path used when the service runs behind the deployment proxy.
pub const DEPLOYED_BASE_PATH: &str = "/dcapture-h2";

/// Where download links point, local development or the proxied deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentContext {
    /// Served from the service root (`""` base).
    Local,
    /// Served behind the proxy prefix.
    Deployed,
    /// Explicitly configured base path.
    Configured(String),
}

impl DeploymentContext {
    /// Classify an origin: anything mentioning `localhost` is local.
    pub fn from_origin(origin: &str) -> Self {
        if origin.contains("localhost") {
            DeploymentContext::Local
        } else {
            DeploymentContext::Deployed
        }
    }

    /// The explicit base path when configured, otherwise classify `origin`.
    /// Evaluated at link materialization time, never cached.
    pub fn resolve(configured_base: Option<&str>, origin: &str) -> Self {
        match configured_base {
            Some(base) => DeploymentContext::Configured(base.to_string()),
            None => Self::from_origin(origin),
        }
    }

    pub fn base_path(&self) -> &str {
        match self {
            DeploymentContext::Local => "",
            DeploymentContext::Deployed => DEPLOYED_BASE_PATH,
            DeploymentContext::Configured(base) => base,
        }
    }
}

/// One shard's downloadable artifact for an application and date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupLink {
    pub shard: Shard,
    /// Display label, empty when cleared.
    pub label: String,
    /// Relative download URL, [`PLACEHOLDER_URL`] when cleared.
    pub url: String,
}

impl BackupLink {
    pub fn cleared(shard: Shard) -> Self {
        Self {
            shard,
            label: String::new(),
            url: PLACEHOLDER_URL.to_string(),
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.url == PLACEHOLDER_URL
    }

    /// Join the download URL with the origin of `service_root`.
    /// Returns `None` for a cleared link.
    pub fn absolute_url(&self, service_root: &str) -> Option<String> {
        if self.is_cleared() {
            return None;
        }
        let origin = origin_of(service_root);
        Some(format!("{}{}", origin, self.url))
    }
}

/// `scheme://host[:port]` part of a URL, or the input unchanged if it has no
/// scheme.
fn origin_of(url: &str) -> &str {
    match url.find("://") {
        Some(scheme_end) => {
            let after = scheme_end + 3;
            match url[after..].find('/') {
                Some(path_start) => &url[..after + path_start],
                None => url,
            }
        }
        None => url.trim_end_matches('/'),
    }
}

/// Outcome of a backup listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupListing {
    /// The service reported these archive names.
    Found(Vec<String>),
    /// The service reported nothing for that date.
    Empty,
    /// The listing call itself failed.
    ListingFailed(RemoteError),
}

impl BackupListing {
    /// Build a listing from a successful response body. The service sends a
    /// comma-separated list (`"shared.zip, sales.zip, "`); a JSON array of
    /// names is accepted too.
    pub fn from_body(body: &str) -> Self {
        let items = parse_items(body);
        if items.is_empty() {
            BackupListing::Empty
        } else {
            BackupListing::Found(items)
        }
    }

    /// Number of items; the only signal the resolver consumes.
    pub fn len(&self) -> usize {
        match self {
            BackupListing::Found(items) => items.len(),
            BackupListing::Empty | BackupListing::ListingFailed(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn items(&self) -> &[String] {
        match self {
            BackupListing::Found(items) => items,
            _ => &[],
        }
    }
}

fn parse_items(body: &str) -> Vec<String> {
    let trimmed = body.trim();
    if trimmed.starts_with('[') {
        if let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(trimmed) {
            return values
                .into_iter()
                .map(|value| match value {
                    serde_json::Value::String(name) => name,
                    other => other.to_string(),
                })
                .filter(|name| !name.trim().is_empty())
                .collect();
        }
    }
    trimmed
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// The seven link slots, always in [`Shard::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupLinks {
    links: [BackupLink; 7],
}

impl Default for BackupLinks {
    fn default() -> Self {
        Self::cleared()
    }
}

impl BackupLinks {
    pub fn cleared() -> Self {
        Self {
            links: Shard::ALL.map(BackupLink::cleared),
        }
    }

    /// Resolve the link set for a listing.
    ///
    /// A zero-cardinality listing (empty or failed) clears every slot.
    /// Otherwise every shard gets `<shard>.zip` and
    /// `<base>/backup/download/<app>?date=<date>&db=<shard>`.
    pub fn resolve(listing: &BackupListing, app_name: &str, date: &str, context: &DeploymentContext) -> Self {
        if listing.is_empty() {
            return Self::cleared();
        }
        Self::populated(app_name, date, context)
    }

    /// All seven links for an application and date, whatever the listing says.
    pub fn populated(app_name: &str, date: &str, context: &DeploymentContext) -> Self {
        let prefix = download_prefix(context.base_path(), app_name, date);
        Self {
            links: Shard::ALL.map(|shard| BackupLink {
                shard,
                label: shard.archive_name(),
                url: format!("{}{}", prefix, shard.name()),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BackupLink> {
        self.links.iter()
    }

    pub fn get(&self, shard: Shard) -> &BackupLink {
        &self.links[shard.index()]
    }

    pub fn as_slice(&self) -> &[BackupLink] {
        &self.links
    }

    pub fn is_cleared(&self) -> bool {
        self.links.iter().all(BackupLink::is_cleared)
    }
}

impl fmt::Display for BackupLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for link in &self.links {
            writeln!(f, "{}\t{}", link.label, link.url)?;
        }
        Ok(())
    }
}

/// `<base>/backup/download/<app>?date=<date>&db=`
pub fn download_prefix(base_path: &str, app_name: &str, date: &str) -> String {
    format!("{}/backup/download/{}?date={}&db=", base_path, app_name, date)
}

/// Attachment file name the service uses for a shard archive.
pub fn download_file_name(app_name: &str, shard: Shard, date: &str) -> String {
    format!("{}-{}-{}.zip", app_name, shard.name(), date)
}
