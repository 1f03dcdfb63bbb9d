//! Operator input form.
//!
//! Six single-line fields, each tied to the action Enter triggers while it has
//! focus. The form only collects text; trimming and validation belong to the
//! dispatcher.

use crate::console;
use crate::ui::components::dialogs::common::create_input_paragraph;
use crate::ui::core::{Action, Component, Focus};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct FormComponent {
    pub create_name: String,
    pub backup_name: String,
    pub listing_name: String,
    pub listing_date: String,
    pub restore_name: String,
    pub restore_date: String,
    pub focus: Focus,
}

impl FormComponent {
    pub fn new(initial_date: &str) -> Self {
        Self {
            listing_date: initial_date.to_string(),
            restore_date: initial_date.to_string(),
            ..Default::default()
        }
    }

    fn field_mut(&mut self, focus: Focus) -> Option<&mut String> {
        match focus {
            Focus::CreateName => Some(&mut self.create_name),
            Focus::BackupName => Some(&mut self.backup_name),
            Focus::ListingName => Some(&mut self.listing_name),
            Focus::ListingDate => Some(&mut self.listing_date),
            Focus::RestoreName => Some(&mut self.restore_name),
            Focus::RestoreDate => Some(&mut self.restore_date),
            Focus::Links => None,
        }
    }

    /// The operator intent behind Enter on a given field
    pub fn action_for(&self, focus: Focus) -> Option<console::Action> {
        match focus {
            Focus::CreateName => Some(console::Action::Create {
                name: self.create_name.clone(),
            }),
            Focus::BackupName => Some(console::Action::CreateBackup {
                name: self.backup_name.clone(),
            }),
            Focus::ListingName | Focus::ListingDate => Some(console::Action::ListBackups {
                name: self.listing_name.clone(),
                date: self.listing_date.clone(),
            }),
            Focus::RestoreName | Focus::RestoreDate => Some(console::Action::Restore {
                name: self.restore_name.clone(),
                date: self.restore_date.clone(),
            }),
            Focus::Links => None,
        }
    }

    /// Field titles and values in display order
    fn fields(&self) -> [(Focus, &'static str, &str); 6] {
        [
            (Focus::CreateName, "Create database", self.create_name.as_str()),
            (Focus::BackupName, "Offline backup of", self.backup_name.as_str()),
            (Focus::ListingName, "Backups of", self.listing_name.as_str()),
            (Focus::ListingDate, "Backup date", self.listing_date.as_str()),
            (Focus::RestoreName, "Restore database", self.restore_name.as_str()),
            (Focus::RestoreDate, "Restore date", self.restore_date.as_str()),
        ]
    }
}

impl Component for FormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let focus = self.focus;
        match key.code {
            KeyCode::Enter => self.action_for(focus).map(Action::Dispatch).unwrap_or(Action::None),
            KeyCode::Backspace => {
                if let Some(field) = self.field_mut(focus) {
                    field.pop();
                }
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                if let Some(field) = self.field_mut(focus) {
                    field.push(c);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Actions ")
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let fields = self.fields();
        let areas = LayoutManager::form_fields(inner, fields.len());
        for ((focus, title, value), area) in fields.iter().zip(areas) {
            let paragraph = create_input_paragraph(value, title, *focus == self.focus);
            f.render_widget(paragraph, area);
        }
    }
}
