//! Drag gesture to control-event translation

use serde::Serialize;
use tracing::trace;

/// Phase of the drag gesture driving the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// Notifications emitted by the control, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlEvent {
    ValueChanged,
    TouchDown,
    TouchDragInside,
    TouchDragOutside,
    TouchDragEnter,
    TouchDragExit,
    TouchUpInside,
    TouchUpOutside,
    TouchCancel,
}

impl ControlEvent {
    pub fn name(self) -> &'static str {
        match self {
            ControlEvent::ValueChanged => "value-changed",
            ControlEvent::TouchDown => "touch-down",
            ControlEvent::TouchDragInside => "touch-drag-inside",
            ControlEvent::TouchDragOutside => "touch-drag-outside",
            ControlEvent::TouchDragEnter => "touch-drag-enter",
            ControlEvent::TouchDragExit => "touch-drag-exit",
            ControlEvent::TouchUpInside => "touch-up-inside",
            ControlEvent::TouchUpOutside => "touch-up-outside",
            ControlEvent::TouchCancel => "touch-cancel",
        }
    }
}

/// Tracks whether the last touch of the current drag was inside the bounds
#[derive(Debug, Clone)]
pub struct DragTracker {
    tracking: bool,
    last_inside: bool,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self {
            tracking: false,
            last_inside: true,
        }
    }
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn is_touch_inside(&self) -> bool {
        self.tracking && self.last_inside
    }

    /// Advance the gesture and return the event it maps to.
    /// `inside` is whether the current touch point lies within the control bounds.
    pub fn track(&mut self, phase: GesturePhase, inside: bool) -> ControlEvent {
        let event = match phase {
            GesturePhase::Began => {
                self.tracking = true;
                self.last_inside = true;
                ControlEvent::TouchDown
            }
            GesturePhase::Changed => match (inside, self.last_inside) {
                (false, false) => ControlEvent::TouchDragOutside,
                (true, false) => {
                    self.last_inside = true;
                    ControlEvent::TouchDragEnter
                }
                (false, true) => {
                    self.last_inside = false;
                    ControlEvent::TouchDragExit
                }
                (true, true) => ControlEvent::TouchDragInside,
            },
            GesturePhase::Ended => {
                self.tracking = false;
                if inside {
                    ControlEvent::TouchUpInside
                } else {
                    ControlEvent::TouchUpOutside
                }
            }
            GesturePhase::Cancelled => {
                self.tracking = false;
                ControlEvent::TouchCancel
            }
        };

        trace!(?phase, inside, event = event.name(), "gesture");
        event
    }
}
