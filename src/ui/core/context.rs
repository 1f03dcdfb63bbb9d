use crate::{config::Config, console::Dispatcher, logger::Logger};
use std::path::PathBuf;

/// Services the app component needs, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub dispatcher: Dispatcher,
    pub logger: Logger,
    pub service_root: String,
    pub download_dir: PathBuf,
    pub initial_date: String,
    pub mouse_enabled: bool,
}

impl AppContext {
    pub fn new(dispatcher: Dispatcher, config: &Config, logger: Logger) -> Self {
        Self {
            dispatcher,
            logger,
            service_root: config.service.root_url.clone(),
            download_dir: config.downloads.directory.clone(),
            initial_date: config.ui.initial_backup_date(),
            mouse_enabled: config.ui.mouse_enabled,
        }
    }
}
