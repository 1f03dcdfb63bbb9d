//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod form_component;
pub mod links_component;
pub mod message_component;
pub mod status_bar;

pub use dialog_component::DialogComponent;
pub use form_component::FormComponent;
pub use links_component::LinksComponent;
pub use message_component::MessageComponent;
pub use status_bar::StatusBar;
