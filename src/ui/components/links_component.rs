//! Backup link list: the seven shard archives of the last listing.

use crate::console::{BackupLink, BackupLinks, Shard};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

/// Rows needed to show every shard plus borders
pub const LINKS_HEIGHT: u16 = Shard::ALL.len() as u16 + 2;

#[derive(Debug, Clone, Default)]
pub struct LinksComponent {
    links: BackupLinks,
    reported: Vec<String>,
    service_root: String,
    pub selected: usize,
    pub focused: bool,
}

impl LinksComponent {
    pub fn new(service_root: impl Into<String>) -> Self {
        Self {
            service_root: service_root.into(),
            ..Default::default()
        }
    }

    pub fn update_data(&mut self, links: BackupLinks, reported: Vec<String>) {
        self.links = links;
        self.reported = reported;
    }

    pub fn selected_shard(&self) -> Shard {
        Shard::ALL[self.selected.min(Shard::ALL.len() - 1)]
    }

    fn link_line(&self, link: &BackupLink) -> Line<'static> {
        if link.is_cleared() {
            return Line::from(Span::styled(
                format!("{:<10} -", link.shard.name()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let url = link.absolute_url(&self.service_root).unwrap_or_else(|| link.url.clone());
        let reported = self.reported.iter().any(|name| name == &link.label);
        let label_style = if reported {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(format!("{:<14}", link.label), label_style),
            Span::styled(url, Style::default().fg(Color::Cyan)),
        ])
    }
}

impl Component for LinksComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(Shard::ALL.len() - 1);
                Action::None
            }
            KeyCode::Enter => Action::Download(self.selected_shard()),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items: Vec<ListItem> = self.links.iter().map(|link| ListItem::new(self.link_line(link))).collect();

        let border_color = if self.focused { Color::Cyan } else { Color::Blue };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Backups ")
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        if self.focused {
            state.select(Some(self.selected));
        }
        f.render_stateful_widget(list, rect, &mut state);
    }
}
