//! dbpanel - a terminal control panel for a database service
//!
//! The panel drives a remote database service over HTTP: it checks and
//! changes the database run state, creates databases, takes offline
//! backups, lists the per-shard backup archives for a date and restores
//! an application's databases from a backup date.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`console`] - Actions, validation, dispatch and panel state
//! * [`remote`] - HTTP client for the database service
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Operator actions, dispatching and the panel state they mutate
pub mod console;

/// Application constants and default values
pub mod constants;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Remote call primitive and its HTTP implementation
pub mod remote;

/// Terminal user interface components and rendering
pub mod ui;
