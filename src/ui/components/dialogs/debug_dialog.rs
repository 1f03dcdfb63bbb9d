//! Debug dialog component for displaying debug logs

use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Debug dialog component for displaying debug logs
pub struct DebugDialog;

impl DebugDialog {
    /// Render the debug dialog
    pub fn render(frame: &mut Frame, area: Rect, logs: &[String], scroll_offset: usize) {
        // Take 80% of the screen
        let modal_width = area.width.saturating_mul(8) / 10;
        let modal_height = area.height.saturating_mul(8) / 10;

        let modal_area = Rect {
            x: area.x + (area.width.saturating_sub(modal_width)) / 2,
            y: area.y + (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .title(DIALOG_TITLE_DEBUG_LOGS)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black))
            .border_style(Style::default().fg(Color::Cyan));

        frame.render_widget(block, modal_area);

        let inner_area = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        if logs.is_empty() {
            let no_logs = Paragraph::new("No debug logs available")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            frame.render_widget(no_logs, inner_area);
            return;
        }

        let visible_height = inner_area.height as usize;
        let start_index = scroll_offset.min(logs.len().saturating_sub(1));

        let log_items: Vec<ListItem> = logs
            .iter()
            .skip(start_index)
            .take(visible_height)
            .map(|log| {
                if let Some(bracket_end) = log.find("] ") {
                    let timestamp = &log[1..bracket_end];
                    let message = &log[bracket_end + 2..];

                    let message_style = if message.contains("WARN") || message.contains("failed") {
                        Style::default().fg(Color::Red)
                    } else if message.contains("Dispatch") {
                        Style::default().fg(Color::Cyan)
                    } else if message.contains("Backups") {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::White)
                    };

                    ListItem::new(Line::from(vec![
                        Span::styled(format!("[{}] ", timestamp), Style::default().fg(Color::DarkGray)),
                        Span::styled(message.to_string(), message_style),
                    ]))
                } else {
                    ListItem::new(Line::from(Span::raw(log.clone())))
                }
            })
            .collect();

        frame.render_widget(List::new(log_items), inner_area);
    }
}
