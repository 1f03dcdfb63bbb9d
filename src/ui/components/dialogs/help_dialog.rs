//! Help dialog

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::LayoutManager;

const HELP_CONTENT: &str = r"
DBPANEL - Database Service Control Panel
========================================

DATABASE ENGINE
---------------
F5          Show database status
F6          Start database
F7          Stop database

FORM
----
Tab         Next field
Shift+Tab   Previous field
Enter       Run the focused field's action:
              Create database name  -> create database
              Backup name           -> create offline backup
              Listing name / date   -> list backups for the date
              Restore name / date   -> restore from that backup
Backspace   Delete last character

BACKUP LINKS
------------
Up/Down     Select a shard archive (j/k also work)
Enter       Download the selected archive

GENERAL
-------
F1          Toggle this help
Ctrl+G      Debug logs
Esc         Close dialog / quit
Ctrl+C      Quit

NOTES
-----
Each action makes one call; the latest response replaces the message.
Listing a date with no backup clears all seven links.

Press 'Esc' or 'F1' to close this help
";

pub struct HelpDialog;

impl HelpDialog {
    pub fn render(f: &mut Frame, area: Rect, scroll_offset: usize) {
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(area.width, area.height);
        let help_area = LayoutManager::centered_rect(help_width, help_height, area);
        f.render_widget(Clear, help_area);

        let lines: Vec<&str> = HELP_CONTENT.lines().collect();
        let total_lines = lines.len();
        let visible_height = help_area.height.saturating_sub(2) as usize;

        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll_offset = scroll_offset.min(max_scroll);

        let help_text = lines
            .iter()
            .skip(scroll_offset)
            .take(visible_height)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");

        let help_paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Help - {}/{} lines ", scroll_offset + 1, total_lines))
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });
        f.render_widget(help_paragraph, help_area);
    }
}
