//! Dialog components module

pub mod common;
mod debug_dialog;
mod help_dialog;

pub use debug_dialog::DebugDialog;
pub use help_dialog::HelpDialog;
