//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one bordered input field
pub const FIELD_HEIGHT: u16 = 3;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (panel on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Calculate the top pane layout (form + output side by side)
    #[must_use]
    pub fn top_pane_layout(area: Rect) -> Vec<Rect> {
        let form_width = std::cmp::min(area.width * 2 / 5, 48);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(form_width), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Calculate the output pane layout (message surface above, links below)
    #[must_use]
    pub fn output_pane_layout(area: Rect, links_height: u16) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(links_height)])
            .split(area)
            .to_vec()
    }

    /// Split the form area into `count` stacked input fields
    #[must_use]
    pub fn form_fields(area: Rect, count: usize) -> Vec<Rect> {
        let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); count];
        constraints.push(Constraint::Min(0));

        Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area)
            .iter()
            .take(count)
            .copied()
            .collect()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate help panel dimensions based on screen size
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 90 } else { 70 };
        let help_height = if screen_height < 40 { 90 } else { 75 };
        (help_width, help_height)
    }
}
