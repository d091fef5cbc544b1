use std::collections::VecDeque;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use segslider_core::{AppConfig, ControlEvent, GesturePhase, SegmentedSlider, TileVariant};
use tracing::debug;

use crate::input::{handle_key_event, handle_mouse_event, Action, CellMetrics, PointerInput};
use crate::keymap::Keymap;
use crate::theme::Theme;
use crate::themes::load_theme;

/// Number of notifications kept for the event log
const EVENT_LOG_CAPACITY: usize = 8;

/// Terminal host state around one slider control
pub struct App {
    pub slider: SegmentedSlider,
    pub theme: Theme,
    pub keymap: Keymap,
    pub metrics: CellMetrics,
    /// Value change per increment/decrement
    pub step: f64,
    /// Where the strip was last drawn
    pub slider_area: Rect,
    /// Most recent notifications, newest last
    pub event_log: VecDeque<ControlEvent>,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            slider: SegmentedSlider::from_config(&config.slider),
            theme: load_theme(&config.ui.theme),
            keymap: Keymap::from_config(&config.keymap),
            metrics: CellMetrics::from_points_per_cell(config.ui.points_per_cell),
            step: config.ui.step,
            slider_area: Rect::default(),
            event_log: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
            status_message: None,
            should_quit: false,
        }
    }

    /// Resize the control to match the area it is drawn in
    pub fn set_slider_area(&mut self, area: Rect) {
        if area == self.slider_area {
            return;
        }
        self.slider_area = area;
        let (width, height) = self.metrics.bounds(area);
        self.slider.set_bounds(width, height);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = handle_key_event(key, &self.keymap);
        self.apply(action);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let input = handle_mouse_event(
            mouse,
            self.slider_area,
            &self.metrics,
            self.slider.is_tracking(),
        );
        match input {
            Some(PointerInput::Gesture { phase, x, y }) => {
                self.slider.drag(phase, x, y);
                self.collect_events();
            }
            Some(PointerInput::Action(action)) => self.apply(action),
            None => {}
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NudgeLeft => self.nudge(-self.metrics.column_points),
            Action::NudgeRight => self.nudge(self.metrics.column_points),
            Action::Increment => self.step_value(self.step),
            Action::Decrement => self.step_value(-self.step),
            Action::ToggleEnabled => {
                let enabled = !self.slider.is_enabled();
                self.slider.set_enabled(enabled);
                self.status_message = Some(if enabled { "Enabled" } else { "Disabled" }.to_string());
            }
            Action::ToggleVariant => {
                let variant = match self.slider.variant() {
                    TileVariant::Section => TileVariant::ReplicatedEdge,
                    TileVariant::ReplicatedEdge => TileVariant::Section,
                };
                self.slider.set_variant(variant);
                self.status_message = Some(format!("Layout: {:?}", variant));
            }
            Action::CancelDrag => {
                if self.slider.is_tracking() {
                    self.slider.drag(GesturePhase::Cancelled, 0.0, 0.0);
                }
            }
            Action::None => {}
        }
        self.collect_events();
    }

    /// Scroll the strip like a user would; the value follows
    fn nudge(&mut self, delta: f64) {
        if !self.slider.is_enabled() {
            return;
        }
        let offset = self.slider.offset() + delta;
        self.slider.scroll_to(offset);
    }

    /// Programmatic value change; emits no value-changed notification
    fn step_value(&mut self, delta: f64) {
        let value = self.slider.value() + delta;
        if self.slider.set_value(value) {
            self.status_message = Some(format!("Value set to {:.3}", self.slider.value()));
        }
    }

    fn collect_events(&mut self) {
        for event in self.slider.take_events() {
            debug!(event = event.name(), value = self.slider.value(), "control event");
            if self.event_log.len() == EVENT_LOG_CAPACITY {
                self.event_log.pop_front();
            }
            self.event_log.push_back(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};

    fn app() -> App {
        let mut config = AppConfig::default();
        config.slider.maximum_value = 10.0;
        config.slider.value = 5.0;
        config.slider.section_count = 4;
        let mut app = App::new(&config);
        app.set_slider_area(Rect::new(0, 0, 50, 3));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_area_sets_bounds() {
        let app = app();
        assert_eq!(app.slider.bounds(), (100.0, 12.0));
    }

    #[test]
    fn test_nudge_changes_value_and_logs() {
        let mut app = app();
        app.apply(Action::NudgeRight);
        assert!(app.slider.value() > 5.0);
        assert_eq!(app.event_log.back(), Some(&ControlEvent::ValueChanged));
    }

    #[test]
    fn test_increment_is_silent() {
        let mut app = app();
        app.step = 1.0;
        app.apply(Action::Increment);
        assert_eq!(app.slider.value(), 6.0);
        assert!(app.event_log.is_empty());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_disabled_blocks_nudge() {
        let mut app = app();
        app.apply(Action::ToggleEnabled);
        app.apply(Action::NudgeRight);
        assert_eq!(app.slider.value(), 5.0);
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_mouse_drag_and_cancel() {
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 25, 1));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 1));
        assert!(app.slider.value() > 5.0);
        app.apply(Action::CancelDrag);

        let log: Vec<_> = app.event_log.iter().copied().collect();
        assert_eq!(
            log,
            vec![
                ControlEvent::TouchDown,
                ControlEvent::TouchDragInside,
                ControlEvent::ValueChanged,
                ControlEvent::TouchCancel,
            ]
        );
        assert!(!app.slider.is_tracking());
    }

    #[test]
    fn test_event_log_is_bounded() {
        let mut app = app();
        for _ in 0..20 {
            app.apply(Action::NudgeRight);
        }
        assert!(app.event_log.len() <= EVENT_LOG_CAPACITY);
    }

    #[test]
    fn test_toggle_variant() {
        let mut app = app();
        app.apply(Action::ToggleVariant);
        assert_eq!(app.slider.variant(), TileVariant::ReplicatedEdge);
    }
}
