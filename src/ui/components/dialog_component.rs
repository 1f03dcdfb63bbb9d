//! Modal dialogs: help and debug logs.

use crate::logger::Logger;
use crate::ui::components::dialogs::{DebugDialog, HelpDialog};
use crate::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::F(1) if self.dialog_type == Some(DialogType::Help) => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => Action::DialogScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::DialogScrollDown,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
                Action::None
            }
            Action::DialogScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            Action::DialogScrollDown => {
                self.scroll_offset += 1;
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.dialog_type {
            Some(DialogType::Help) => HelpDialog::render(f, rect, self.scroll_offset),
            Some(DialogType::Logs) => {
                let logs = self.logger.get_logs();
                self.scroll_offset = self.scroll_offset.min(logs.len().saturating_sub(1));
                DebugDialog::render(f, rect, &logs, self.scroll_offset);
            }
            None => {}
        }
    }
}
