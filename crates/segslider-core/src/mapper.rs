//! Value <-> scroll offset mapping
//!
//! The strip scrolls horizontally inside a viewport with half-viewport
//! insets on both sides, so the fixed center indicator can reach both ends
//! of the content. Progress is the normalized position of the indicator
//! over the content and maps affinely onto the value range.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;

use crate::ValueRange;

/// Scroll extents of the strip
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollGeometry {
    pub content_width: f64,
    pub inset_left: f64,
    pub inset_right: f64,
}

impl ScrollGeometry {
    /// Symmetric insets of half the viewport width
    pub fn centered(content_width: f64, viewport_width: f64) -> Self {
        let inset = if viewport_width.is_finite() {
            viewport_width.max(0.0) / 2.0
        } else {
            0.0
        };
        Self {
            content_width,
            inset_left: inset,
            inset_right: inset,
        }
    }

    /// Lowest reachable offset; the indicator sits on the content start
    pub fn min_offset(&self) -> f64 {
        -self.inset_left
    }

    /// Highest reachable offset; the indicator sits on the content end
    pub fn max_offset(&self) -> f64 {
        self.content_width - self.inset_left
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        let max = self.max_offset().max(self.min_offset());
        offset.clamp(self.min_offset(), max)
    }
}

/// Normalized value position; 0 for a collapsed range
pub fn progress_for_value(range: &ValueRange) -> f64 {
    if range.is_degenerate() {
        return 0.0;
    }
    (range.value() - range.minimum()) / range.span()
}

pub fn offset_for_value(range: &ValueRange, geometry: &ScrollGeometry) -> f64 {
    -geometry.inset_left + progress_for_value(range) * geometry.content_width
}

/// Normalized indicator position for a scroll offset, clamped to [0, 1]
pub fn progress_for_offset(offset: f64, geometry: &ScrollGeometry) -> f64 {
    if geometry.content_width == 0.0 || !geometry.content_width.is_finite() || !offset.is_finite() {
        return 0.0;
    }
    ((offset + geometry.inset_left) / geometry.content_width).clamp(0.0, 1.0)
}

pub fn value_for_offset(offset: f64, range: &ValueRange, geometry: &ScrollGeometry) -> f64 {
    range.minimum() + progress_for_offset(offset, geometry) * range.span()
}

/// Gate deciding whether scroll writes propagate back into the value.
///
/// Internal writes hold a [`SuppressToken`] for their duration. Tokens nest;
/// the gate reopens when the last one drops.
#[derive(Debug, Clone, Default)]
pub struct NotificationGate {
    depth: Rc<Cell<usize>>,
}

impl NotificationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.depth.get() == 0
    }

    #[must_use = "the gate reopens as soon as the token is dropped"]
    pub fn suppress(&self) -> SuppressToken {
        self.depth.set(self.depth.get() + 1);
        SuppressToken {
            depth: Rc::clone(&self.depth),
        }
    }
}

#[derive(Debug)]
pub struct SuppressToken {
    depth: Rc<Cell<usize>>,
}

impl Drop for SuppressToken {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geometry() -> ScrollGeometry {
        ScrollGeometry::centered(300.0, 100.0)
    }

    #[test]
    fn test_midpoint_example() {
        let range = ValueRange::new(0.0, 10.0, 5.0);
        let geometry = ScrollGeometry::centered(30.0, 100.0);
        assert_eq!(progress_for_value(&range), 0.5);
        let offset = offset_for_value(&range, &geometry);
        assert_eq!(offset + geometry.inset_left, geometry.content_width / 2.0);
    }

    #[test]
    fn test_progress_uses_minimum() {
        let range = ValueRange::new(10.0, 20.0, 15.0);
        assert_eq!(progress_for_value(&range), 0.5);
    }

    #[test]
    fn test_degenerate_range_progress() {
        let range = ValueRange::new(3.0, 3.0, 100.0);
        assert_eq!(progress_for_value(&range), 0.0);
        assert_eq!(offset_for_value(&range, &geometry()), -50.0);
    }

    #[test]
    fn test_zero_content_width() {
        let geometry = ScrollGeometry::centered(0.0, 100.0);
        assert_eq!(progress_for_offset(25.0, &geometry), 0.0);
        let range = ValueRange::new(0.0, 1.0, 0.5);
        assert_eq!(value_for_offset(25.0, &range, &geometry), 0.0);
    }

    #[test]
    fn test_offset_progress_clamped() {
        assert_eq!(progress_for_offset(-500.0, &geometry()), 0.0);
        assert_eq!(progress_for_offset(5000.0, &geometry()), 1.0);
    }

    #[test]
    fn test_offset_bounds() {
        let g = geometry();
        assert_eq!(g.min_offset(), -50.0);
        assert_eq!(g.max_offset(), 250.0);
        assert_eq!(g.clamp_offset(1000.0), 250.0);
        assert_eq!(g.clamp_offset(-1000.0), -50.0);
    }

    #[test]
    fn test_gate_nesting() {
        let gate = NotificationGate::new();
        assert!(gate.is_open());
        {
            let _outer = gate.suppress();
            {
                let _inner = gate.suppress();
                assert!(!gate.is_open());
            }
            assert!(!gate.is_open());
        }
        assert!(gate.is_open());
    }

    proptest! {
        #[test]
        fn prop_value_offset_round_trip(
            min in -1e4f64..1e4,
            span in 1e-3f64..1e4,
            t in 0f64..=1.0,
            content in 1f64..1e5,
            viewport in 0f64..4000.0,
        ) {
            let range = ValueRange::new(min, min + span, min + t * span);
            let geometry = ScrollGeometry::centered(content, viewport);
            let offset = offset_for_value(&range, &geometry);
            let back = value_for_offset(offset, &range, &geometry);
            let tolerance = 1e-9 * (1.0 + min.abs() + span);
            prop_assert!((back - range.value()).abs() <= tolerance, "{} vs {}", back, range.value());
        }
    }
}
