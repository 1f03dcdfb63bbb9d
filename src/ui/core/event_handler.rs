use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEventKind};
use tokio::time::{Duration, Instant};

/// Idle wait between polls; background completions are applied on each tick.
const TICK: Duration = Duration::from_millis(50);
const FRAME: Duration = Duration::from_millis(16);

/// Polls the terminal without blocking the runtime.
pub struct EventHandler {
    last_render_time: Instant,
    mouse_enabled: bool,
}

impl EventHandler {
    pub fn new(mouse_enabled: bool) -> Self {
        Self {
            last_render_time: Instant::now(),
            mouse_enabled,
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        if poll(Duration::from_millis(0))? {
            let event = match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Mouse(mouse) if self.mouse_enabled => match mouse.kind {
                    MouseEventKind::ScrollUp => EventType::Scroll(ScrollDirection::Up),
                    MouseEventKind::ScrollDown => EventType::Scroll(ScrollDirection::Down),
                    _ => EventType::Other,
                },
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            };
            return Ok(event);
        }

        tokio::time::sleep(TICK).await;
        Ok(EventType::Tick)
    }

    pub fn mark_rendered(&mut self) {
        self.last_render_time = Instant::now();
    }

    /// At most one frame per [`FRAME`]
    pub fn should_render(&self) -> bool {
        self.last_render_time.elapsed() >= FRAME
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Scroll(ScrollDirection),
    Resize(u16, u16),
    Tick,
    Other,
}
