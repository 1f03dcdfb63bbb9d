//! Operator actions, their local validation, and the endpoint each one calls.

use crate::constants::{
    MSG_EMPTY_DATABASE_NAME, MSG_EMPTY_RESTORE_DATABASE, MSG_EMPTY_RESTORE_DATE, PROGRESS_CREATE,
    PROGRESS_START, PROGRESS_STATUS, PROGRESS_STOP,
};
use crate::remote::{ExpectedContent, RemoteRequest};
use std::fmt;

/// One discrete operator intent. Field values are kept as typed; trimming
/// happens during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Status,
    Start,
    Stop,
    Create { name: String },
    CreateBackup { name: String },
    ListBackups { name: String, date: String },
    Restore { name: String, date: String },
}

impl Action {
    /// Short label used in logs and the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Status => "Database status",
            Action::Start => "Start database",
            Action::Stop => "Stop database",
            Action::Create { .. } => "Create database",
            Action::CreateBackup { .. } => "Create backup",
            Action::ListBackups { .. } => "List backups",
            Action::Restore { .. } => "Restore database",
        }
    }

    /// Validate inputs and build the single remote call for this action.
    /// No network activity happens here.
    pub fn prepare(&self) -> Result<PreparedCall, ValidationError> {
        let prepared = match self {
            Action::Status => PreparedCall::simple("database/status", ExpectedContent::HtmlText, Some(PROGRESS_STATUS)),
            Action::Start => PreparedCall::simple("database/start", ExpectedContent::HtmlText, Some(PROGRESS_START)),
            Action::Stop => PreparedCall::simple("database/stop", ExpectedContent::HtmlText, Some(PROGRESS_STOP)),
            Action::Create { name } => {
                let name = required(name, ValidationError::EmptyDatabaseName)?;
                PreparedCall::simple(
                    format!("database/create?name={}", name),
                    ExpectedContent::HtmlText,
                    Some(PROGRESS_CREATE),
                )
            }
            Action::CreateBackup { name } => {
                let name = required(name, ValidationError::EmptyDatabaseName)?;
                PreparedCall::simple(format!("backup/create/{}?type=offline", name), ExpectedContent::Text, None)
            }
            Action::ListBackups { name, date } => {
                let name = required(name, ValidationError::EmptyDatabaseName)?;
                PreparedCall {
                    request: RemoteRequest::get(
                        format!("backup/load-backup/{}?date={}", name, date),
                        ExpectedContent::Text,
                    ),
                    progress: None,
                    listing: Some(ListingTarget {
                        app_name: name.to_string(),
                        date: date.clone(),
                    }),
                }
            }
            Action::Restore { name, date } => {
                let name = required(name, ValidationError::EmptyRestoreDatabase)?;
                if date.is_empty() {
                    return Err(ValidationError::EmptyRestoreDate);
                }
                PreparedCall::simple(format!("restore/execute/{}?date={}", name, date), ExpectedContent::Text, None)
            }
        };
        Ok(prepared)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create { name } | Action::CreateBackup { name } => write!(f, "{} '{}'", self.label(), name.trim()),
            Action::ListBackups { name, date } | Action::Restore { name, date } => {
                write!(f, "{} '{}' on '{}'", self.label(), name.trim(), date)
            }
            _ => f.write_str(self.label()),
        }
    }
}

fn required(value: &str, error: ValidationError) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed)
    }
}

/// Local validation failure; the display text is what the operator sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", MSG_EMPTY_DATABASE_NAME)]
    EmptyDatabaseName,

    #[error("{}", MSG_EMPTY_RESTORE_DATABASE)]
    EmptyRestoreDatabase,

    #[error("{}", MSG_EMPTY_RESTORE_DATE)]
    EmptyRestoreDate,
}

/// Application and date a listing was issued for; carried to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTarget {
    pub app_name: String,
    pub date: String,
}

/// A validated action, ready to go over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCall {
    pub request: RemoteRequest,
    /// Local message shown while the call is in flight.
    pub progress: Option<&'static str>,
    /// Present for backup listings only.
    pub listing: Option<ListingTarget>,
}

impl PreparedCall {
    fn simple(path: impl Into<String>, expected: ExpectedContent, progress: Option<&'static str>) -> Self {
        Self {
            request: RemoteRequest::get(path, expected),
            progress,
            listing: None,
        }
    }
}
