use ratatui::{
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates an input field block; the focused field shows a cursor and a
/// highlighted border
pub fn create_input_paragraph<'a>(input_buffer: &'a str, field_title: &str, focused: bool) -> Paragraph<'a> {
    let (input_display, border_color) = if focused {
        (format!("{}█", input_buffer), Color::Cyan)
    } else {
        (input_buffer.to_string(), Color::Gray)
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .border_style(Style::default().fg(border_color));

    Paragraph::new(input_display).block(input_block).style(Style::default().fg(Color::White))
}
