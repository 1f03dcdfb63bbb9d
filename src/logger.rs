use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Target used for lines that are already buffered by [`Logger::log`].
const UI_TARGET: &str = "dbpanel::ui";
const MAX_BUFFERED_LINES: usize = 1000;

/// Shared logger that can be used across the application.
///
/// Keeps an in-memory buffer for the debug log dialog and forwards to the
/// `log` facade. [`Logger::from_config`] installs a fern dispatch that feeds
/// the buffer and, when enabled, a log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_path: Option<PathBuf>,
    installed: bool,
}

impl Logger {
    /// In-memory logger; nothing is installed on the `log` facade.
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_path: None,
            installed: false,
        }
    }

    /// Install the global dispatch described by `config`.
    ///
    /// A global logger can only be set once per process; if one is already in
    /// place the returned logger still buffers its own lines.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let mut logger = Self::new();
        let level = config.level_filter()?;

        // Buffer lines are formatted here from the raw record, same shape as
        // the file lines
        let buffer = Arc::clone(&logger.logs);
        let buffer_output = fern::Dispatch::new()
            .filter(|metadata| metadata.target() != UI_TARGET)
            .chain(fern::Output::call(move |record| {
                push_line(&buffer, format_record(record));
            }));

        let mut dispatch = fern::Dispatch::new()
            .level(level)
            .level_for("reqwest", log::LevelFilter::Warn)
            .level_for("hyper", log::LevelFilter::Warn)
            .level_for("rustls", log::LevelFilter::Warn)
            .chain(buffer_output);

        if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{}] {} {}: {}",
                            timestamp(),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
            logger.file_path = Some(path);
        }

        logger.installed = dispatch.apply().is_ok();
        Ok(logger)
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        push_line(&self.logs, format!("[{}] {}", timestamp(), message));
        log::info!(target: UI_TARGET, "{}", message);
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Whether this logger owns the global `log` dispatch.
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Whether lines are also written to a log file.
    pub fn has_file_writer(&self) -> bool {
        self.installed && self.file_path.is_some()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}

fn format_record(record: &log::Record) -> String {
    format!("[{}] {} {}: {}", timestamp(), record.level(), record.target(), record.args())
}

fn push_line(logs: &Mutex<Vec<String>>, line: String) {
    if let Ok(mut logs) = logs.lock() {
        if logs.len() >= MAX_BUFFERED_LINES {
            logs.remove(0);
        }
        logs.push(line);
    }
}
