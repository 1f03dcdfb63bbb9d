//! Decision logic of the control panel.
//!
//! - [`action`] - operator actions, local validation, endpoint paths
//! - [`dispatcher`] - one remote call per action, outcome routing
//! - [`resolver`] - backup listing to seven shard download links
//! - [`message`] - single-surface message rendering
//! - [`state`] - the panel state every handler mutates
//! - [`shard`] - the fixed set of database partitions

pub mod action;
pub mod dispatcher;
pub mod message;
pub mod resolver;
pub mod shard;
pub mod state;

pub use action::{Action, ListingTarget, PreparedCall, ValidationError};
pub use dispatcher::{Completion, Dispatcher, LinkSettings};
pub use message::{MessageBox, Payload, Rendered};
pub use resolver::{BackupLink, BackupLinks, BackupListing, DeploymentContext};
pub use shard::Shard;
pub use state::PanelState;
