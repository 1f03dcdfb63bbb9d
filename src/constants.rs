//! Constants used throughout the application
//!
//! This module centralizes operator-facing messages, defaults, and UI text.

// Local validation messages
pub const MSG_EMPTY_DATABASE_NAME: &str = "Database name should not be empty.";
pub const MSG_EMPTY_RESTORE_DATABASE: &str = "Restore database should not be empty.";
pub const MSG_EMPTY_RESTORE_DATE: &str = "Restore date should not be empty.";

// Progress messages shown while a call is in flight
pub const PROGRESS_STATUS: &str = "Loading Database Status ...";
pub const PROGRESS_START: &str = "Starting Database ...";
pub const PROGRESS_STOP: &str = "Shutdown Database ...";
pub const PROGRESS_CREATE: &str = "Create Database ...";

// Download messages
pub const MSG_NO_BACKUP_SELECTED: &str = "No backup archive to download. List backups for a date first.";
pub const MSG_DOWNLOAD_SAVED: &str = "Saved";
pub const MSG_DOWNLOAD_FAILED: &str = "Download failed";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "Debug Logs - Press 'Esc' or 'q' to close";
pub const STATUS_HINTS: &str = "F5 status • F6 start • F7 stop • Enter run • Tab next • F1 help • Esc quit";

// Defaults
pub const DEFAULT_SERVICE_ROOT: &str = "http://localhost:8080/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MAX_TIMEOUT_SECS: u64 = 600;
/// Backup folders on the service are named with this format.
pub const BACKUP_DATE_FORMAT: &str = "%Y-%m-%d";

// Files
pub const APP_DIR_NAME: &str = "dbpanel";
pub const LOCAL_CONFIG_FILE: &str = "dbpanel.toml";
pub const LOG_FILE_NAME: &str = "dbpanel.log";
