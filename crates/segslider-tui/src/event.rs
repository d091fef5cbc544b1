use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Terminal events the slider host reacts to
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Press, drag, release or wheel anywhere on screen
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// The terminal lost focus; a release may never arrive
    FocusLost,
    /// Nothing happened within one tick
    Tick,
}

/// Blocking poll loop over crossterm events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
        }
    }

    /// Wait up to one tick for the next event.
    /// Returns `None` for events the host ignores.
    pub fn next(&self) -> Result<Option<AppEvent>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(AppEvent::Tick));
        }
        Ok(translate(event::read()?))
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // Release and repeat events are reported on some terminals
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
        Event::FocusLost => Some(AppEvent::FocusLost),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseButton, MouseEventKind};

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(translate(Event::Key(release)).is_none());

        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(translate(Event::Key(press)), Some(AppEvent::Key(_))));
    }

    #[test]
    fn test_mouse_and_focus() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches!(translate(Event::Mouse(mouse)), Some(AppEvent::Mouse(_))));
        assert!(matches!(translate(Event::FocusLost), Some(AppEvent::FocusLost)));
        assert!(translate(Event::FocusGained).is_none());
    }
}
