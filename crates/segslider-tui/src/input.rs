use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use segslider_core::GesturePhase;

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NudgeLeft,   // scroll the strip one cell left
    NudgeRight,  // scroll the strip one cell right
    Increment,
    Decrement,
    ToggleEnabled,
    ToggleVariant,
    CancelDrag,  // Esc while dragging
    None,
}

/// Pointer input translated into slider terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Drag sample in control coordinates (points)
    Gesture { phase: GesturePhase, x: f64, y: f64 },
    Action(Action),
}

/// Size of one terminal cell in slider points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub column_points: f64,
    pub row_points: f64,
}

impl CellMetrics {
    /// Terminal cells are roughly twice as tall as they are wide
    pub fn from_points_per_cell(points_per_cell: f64) -> Self {
        let column_points = if points_per_cell.is_finite() && points_per_cell > 0.0 {
            points_per_cell
        } else {
            1.0
        };
        Self {
            column_points,
            row_points: column_points * 2.0,
        }
    }

    /// Control bounds in points for a widget area
    pub fn bounds(&self, area: Rect) -> (f64, f64) {
        (
            area.width as f64 * self.column_points,
            area.height as f64 * self.row_points,
        )
    }

    /// Center of the cell at (column, row), relative to `area`, in points
    pub fn to_control_point(&self, column: u16, row: u16, area: Rect) -> (f64, f64) {
        let x = (column as f64 - area.x as f64 + 0.5) * self.column_points;
        let y = (row as f64 - area.y as f64 + 0.5) * self.row_points;
        (x, y)
    }
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    keymap
        .get(&KeyBinding::new(key.code, key.modifiers))
        .copied()
        .unwrap_or(Action::None)
}

/// Translate a mouse event over the slider area.
///
/// A left press only starts a drag when it lands inside `area`; drags and
/// releases are reported wherever they happen so the control can track
/// exits and re-entries.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    area: Rect,
    metrics: &CellMetrics,
    dragging: bool,
) -> Option<PointerInput> {
    let (x, y) = metrics.to_control_point(mouse.column, mouse.row, area);
    let over_area = mouse.column >= area.x
        && mouse.column < area.x.saturating_add(area.width)
        && mouse.row >= area.y
        && mouse.row < area.y.saturating_add(area.height);

    let phase = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if over_area => GesturePhase::Began,
        MouseEventKind::Drag(MouseButton::Left) if dragging => GesturePhase::Changed,
        MouseEventKind::Up(MouseButton::Left) if dragging => GesturePhase::Ended,
        MouseEventKind::ScrollUp if over_area => return Some(PointerInput::Action(Action::NudgeLeft)),
        MouseEventKind::ScrollDown if over_area => {
            return Some(PointerInput::Action(Action::NudgeRight))
        }
        _ => return None,
    };

    Some(PointerInput::Gesture { phase, x, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn area() -> Rect {
        Rect::new(10, 5, 40, 3)
    }

    #[test]
    fn test_key_lookup() {
        let keymap = Keymap::default();
        let key = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key, &keymap), Action::NudgeRight);
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(key, &keymap), Action::None);
    }

    #[test]
    fn test_control_point() {
        let metrics = CellMetrics::from_points_per_cell(2.0);
        assert_eq!(metrics.to_control_point(10, 5, area()), (1.0, 2.0));
        assert_eq!(metrics.bounds(area()), (80.0, 12.0));
        let (x, _) = metrics.to_control_point(0, 5, area());
        assert!(x < 0.0);
    }

    #[test]
    fn test_press_outside_area_ignored() {
        let metrics = CellMetrics::from_points_per_cell(2.0);
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 0, 0);
        assert_eq!(handle_mouse_event(event, area(), &metrics, false), None);
    }

    #[test]
    fn test_drag_sequence() {
        let metrics = CellMetrics::from_points_per_cell(1.0);
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 20, 6);
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 60, 20);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 60, 20);

        assert!(matches!(
            handle_mouse_event(down, area(), &metrics, false),
            Some(PointerInput::Gesture { phase: GesturePhase::Began, .. })
        ));
        // Drags outside the area still reach the control
        assert!(matches!(
            handle_mouse_event(drag, area(), &metrics, true),
            Some(PointerInput::Gesture { phase: GesturePhase::Changed, .. })
        ));
        assert!(matches!(
            handle_mouse_event(up, area(), &metrics, true),
            Some(PointerInput::Gesture { phase: GesturePhase::Ended, .. })
        ));
        // Without an active drag, releases are noise
        assert_eq!(handle_mouse_event(up, area(), &metrics, false), None);
    }

    #[test]
    fn test_wheel_nudges() {
        let metrics = CellMetrics::from_points_per_cell(1.0);
        let wheel = mouse(MouseEventKind::ScrollDown, 20, 6);
        assert_eq!(
            handle_mouse_event(wheel, area(), &metrics, false),
            Some(PointerInput::Action(Action::NudgeRight))
        );
    }
}
