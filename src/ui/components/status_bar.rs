//! Status bar component

use crate::constants::STATUS_HINTS;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, in_flight: &[&str]) {
        let (status_text, status_color) = match in_flight {
            [] => (STATUS_HINTS.to_string(), Color::Gray),
            [only] => (format!("⟳ {}", only), Color::Yellow),
            [.., last] => (format!("⟳ {} (+{} more)", last, in_flight.len() - 1), Color::Yellow),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
