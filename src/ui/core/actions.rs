use crate::console::{self, Completion, Shard};
use std::path::PathBuf;

/// Form field that currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    CreateName,
    BackupName,
    ListingName,
    ListingDate,
    RestoreName,
    RestoreDate,
    Links,
}

impl Focus {
    pub const ORDER: [Focus; 7] = [
        Focus::CreateName,
        Focus::BackupName,
        Focus::ListingName,
        Focus::ListingDate,
        Focus::RestoreName,
        Focus::RestoreDate,
        Focus::Links,
    ];

    pub fn next(self) -> Focus {
        let position = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(position + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Focus {
        let position = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(position + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Operator intents handed to the dispatcher
    Dispatch(console::Action),
    RemoteCompleted(Completion),

    // Shard downloads
    Download(Shard),
    DownloadCompleted {
        shard: Shard,
        result: Result<PathBuf, String>,
    },

    // Navigation
    FocusNext,
    FocusPrevious,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    DialogScrollUp,
    DialogScrollDown,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
