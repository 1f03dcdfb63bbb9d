//! Core UI functionality for dbpanel.
//!
//! # Module Components
//!
//! - [`actions`] - UI actions and focus targets
//! - [`component`] - Base component trait
//! - [`context`] - Services shared by the app component
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background remote calls
//!
//! Key events become [`Action`]s, components pass them down the hierarchy, and
//! the app component hands operator intents to the dispatcher. Remote calls
//! run on the [`TaskManager`] and come back as [`Action::RemoteCompleted`].

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType, ScrollDirection};
pub use task_manager::{TaskId, TaskManager};
