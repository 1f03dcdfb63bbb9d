//! Configuration management for dbpanel
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, BACKUP_DATE_FORMAT, CONFIG_GENERATED, DEFAULT_SERVICE_ROOT, DEFAULT_TIMEOUT_SECS, LOCAL_CONFIG_FILE,
    MAX_TIMEOUT_SECS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub downloads: DownloadsConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Remote service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service root every endpoint path is relative to
    pub root_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Backup download configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadsConfig {
    /// Explicit base path for download links.
    /// Unset: "" when root_url mentions localhost, "/dcapture-h2" otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Directory downloaded shard archives are written to
    pub directory: PathBuf,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pre-fill for the backup date fields: "today" or "" (no pre-fill)
    pub default_backup_date: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write the log to a file
    pub enabled: bool,
    /// error, warn, info, debug or trace
    pub level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_SERVICE_ROOT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for DownloadsConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            directory: PathBuf::from("."),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_backup_date: "today".to_string(),
            mouse_enabled: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl UiConfig {
    /// Initial value of the date fields.
    pub fn initial_backup_date(&self) -> String {
        if self.default_backup_date == "today" {
            chrono::Local::now().format(BACKUP_DATE_FORMAT).to_string()
        } else {
            String::new()
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let root = reqwest::Url::parse(self.service.root_url.trim())
            .with_context(|| format!("Invalid root_url '{}'", self.service.root_url))?;
        if root.scheme() != "http" && root.scheme() != "https" {
            anyhow::bail!("root_url must use http or https, got '{}'", root.scheme());
        }

        if self.service.timeout_secs == 0 || self.service.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "timeout_secs must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.service.timeout_secs
            );
        }

        if let Some(base) = &self.downloads.base_path {
            if !base.is_empty() && (!base.starts_with('/') || base.ends_with('/')) {
                anyhow::bail!("base_path must be empty or start with '/' and not end with '/', got '{}'", base);
            }
        }

        self.logging.level_filter()?;

        match self.ui.default_backup_date.as_str() {
            "today" | "" => {}
            other => anyhow::bail!("default_backup_date must be \"today\" or empty, got '{}'", other),
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# dbpanel Configuration File\n# Generated on {}\n#\n# [downloads] base_path = \"/dcapture-h2\" pins the download link base.\n\n",
            chrono::Local::now().format(BACKUP_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
