use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A pane of the panel.
///
/// Keys go to whichever component owns the focus; whatever [`Action`] it
/// returns is offered to [`Component::update`] of the others before the app
/// component acts on it.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Consume the actions this component owns, pass the rest back.
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
