//! Panel state shared by every action handler.

use crate::console::action::ListingTarget;
use crate::console::message::{MessageBox, Payload, Rendered};
use crate::console::resolver::{BackupLinks, BackupListing};

/// Everything the panel displays: one message surface and seven link slots.
///
/// Constructed once at startup and handed to each handler. Only completion
/// handling mutates it.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    pub message: MessageBox,
    pub links: BackupLinks,
    /// Outcome of the most recently applied listing, if any.
    pub listing: Option<BackupListing>,
    /// Application and date the current links were resolved for.
    pub listing_target: Option<ListingTarget>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, payload: impl Into<Payload>) {
        self.message.show(payload);
    }

    pub fn current_message(&self) -> Option<&Rendered> {
        self.message.current()
    }

    /// Archive names the service reported for the last listing.
    pub fn reported_archives(&self) -> &[String] {
        self.listing.as_ref().map(BackupListing::items).unwrap_or_default()
    }

    pub fn listing_failed(&self) -> bool {
        matches!(self.listing, Some(BackupListing::ListingFailed(_)))
    }
}
