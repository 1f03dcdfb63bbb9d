//! The single message surface.

use crate::console::Rendered;
use crate::ui::core::{Action, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct MessageComponent {
    message: Option<Rendered>,
    in_flight: usize,
}

impl MessageComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, message: Option<Rendered>, in_flight: usize) {
        self.message = message;
        self.in_flight = in_flight;
    }
}

impl Component for MessageComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = match (&self.message, self.in_flight) {
            (_, n) if n > 0 => format!(" Message ({} pending) ", n),
            (Some(Rendered::Markup(_)), _) => " Message (html) ".to_string(),
            _ => " Message ".to_string(),
        };

        let lines: Vec<Line> = self
            .message
            .as_ref()
            .map(|rendered| rendered.lines().into_iter().map(Line::from).collect())
            .unwrap_or_default();

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, rect);
    }
}
