//! The segmented slider control
//!
//! Holds the style, the value range and the scroll state, and keeps them
//! consistent through explicit recomputation. Programmatic writes never
//! emit `ValueChanged`; only scroll writes coming from the user do.

use serde::Serialize;
use tracing::debug;

use crate::mapper::{self, NotificationGate, ScrollGeometry};
use crate::tile::{TileLayout, TileVariant};
use crate::{ControlEvent, DragTracker, Error, GesturePhase, Result, Rgba, SegmentStyle, SliderConfig, ValueRange};

/// Preferred height of the control in points
pub const INTRINSIC_HEIGHT: f64 = 30.0;

/// Frame of the fixed center indicator in control coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Snapshot of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderGeometry {
    pub tile: TileLayout,
    pub scroll: ScrollGeometry,
    pub offset: f64,
    pub progress: f64,
    pub indicator: IndicatorFrame,
}

impl SliderGeometry {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug)]
pub struct SegmentedSlider {
    style: SegmentStyle,
    range: ValueRange,
    variant: TileVariant,
    enabled: bool,
    width: f64,
    height: f64,
    tile: TileLayout,
    scroll: ScrollGeometry,
    offset: f64,
    gate: NotificationGate,
    tracker: DragTracker,
    last_drag_x: Option<f64>,
    events: Vec<ControlEvent>,
}

impl Default for SegmentedSlider {
    fn default() -> Self {
        Self::with_parts(SegmentStyle::default(), ValueRange::default(), TileVariant::default())
    }
}

impl SegmentedSlider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a control from its configured initial state
    pub fn from_config(config: &SliderConfig) -> Self {
        let mut style = SegmentStyle::default();
        style.set_segment_count(config.segment_count);
        style.set_section_count(config.section_count);
        style.set_section_width(config.section_width);
        style.set_separator_line_width(config.separator_line_width);
        style.set_separator_line_height_difference(config.separator_line_height_difference);
        style.set_segment_color(config.segment_color);

        let range = ValueRange::new(config.minimum_value, config.maximum_value, config.value);

        let mut slider = Self::with_parts(style, range, config.variant);
        slider.enabled = config.enabled;
        slider
    }

    fn with_parts(style: SegmentStyle, range: ValueRange, variant: TileVariant) -> Self {
        let tile = TileLayout::compute(&style, variant, 0.0);
        let scroll = ScrollGeometry::centered(tile.content_width, 0.0);
        let mut slider = Self {
            style,
            range,
            variant,
            enabled: true,
            width: 0.0,
            height: INTRINSIC_HEIGHT,
            tile,
            scroll,
            offset: 0.0,
            gate: NotificationGate::new(),
            tracker: DragTracker::new(),
            last_drag_x: None,
            events: Vec::new(),
        };
        slider.recompute();
        slider
    }

    // Accessors

    pub fn value(&self) -> f64 {
        self.range.value()
    }

    pub fn minimum_value(&self) -> f64 {
        self.range.minimum()
    }

    pub fn maximum_value(&self) -> f64 {
        self.range.maximum()
    }

    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    pub fn style(&self) -> &SegmentStyle {
        &self.style
    }

    pub fn variant(&self) -> TileVariant {
        self.variant
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn tile(&self) -> &TileLayout {
        &self.tile
    }

    pub fn scroll_geometry(&self) -> &ScrollGeometry {
        &self.scroll
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Normalized position of the current value
    pub fn progress(&self) -> f64 {
        mapper::progress_for_value(&self.range)
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    pub fn is_touch_inside(&self) -> bool {
        self.tracker.is_touch_inside()
    }

    /// Center indicator: one separator wide, full height, at the bounds midpoint
    pub fn indicator(&self) -> IndicatorFrame {
        let width = self.style.separator_line_width();
        IndicatorFrame {
            x: self.width / 2.0 - width / 2.0,
            y: 0.0,
            width,
            height: self.height,
        }
    }

    pub fn geometry(&self) -> SliderGeometry {
        SliderGeometry {
            tile: self.tile.clone(),
            scroll: self.scroll,
            offset: self.offset,
            progress: self.progress(),
            indicator: self.indicator(),
        }
    }

    /// Drain queued notifications, oldest first
    pub fn take_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    // Layout

    /// Recompute the tile layout and scroll extents from the current style and
    /// bounds, then move the strip to the current value without re-deriving it.
    pub fn recompute(&mut self) -> SliderGeometry {
        self.tile = TileLayout::compute(&self.style, self.variant, self.width);
        self.scroll = ScrollGeometry::centered(self.tile.content_width, self.width);
        self.sync_offset();
        self.geometry()
    }

    fn sync_offset(&mut self) {
        let _token = self.gate.suppress();
        let offset = mapper::offset_for_value(&self.range, &self.scroll);
        self.write_offset(offset);
    }

    fn write_offset(&mut self, offset: f64) {
        debug!(offset, "setting offset");
        self.offset = offset;

        if !self.gate.is_open() {
            return;
        }

        let value = mapper::value_for_offset(offset, &self.range, &self.scroll);
        if self.range.set_value(value) {
            debug!(value, "derived value");
            self.events.push(ControlEvent::ValueChanged);
        }
    }

    /// Resize the control; insets and edge replicas follow the width
    pub fn set_bounds(&mut self, width: f64, height: f64) -> SliderGeometry {
        self.width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.recompute()
    }

    // Value range

    /// Set the value, clamped into the range. Returns true if it changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        if !self.range.set_value(value) {
            return false;
        }
        self.sync_offset();
        true
    }

    /// Animated transitions are not supported; the value is left untouched.
    pub fn set_value_animated(&mut self, _value: f64, _animated: bool) -> Result<()> {
        Err(Error::Unsupported("animated value transition"))
    }

    pub fn set_minimum_value(&mut self, minimum: f64) {
        self.range.set_minimum(minimum);
        self.sync_offset();
    }

    pub fn set_maximum_value(&mut self, maximum: f64) {
        self.range.set_maximum(maximum);
        self.sync_offset();
    }

    // Style

    pub fn set_segment_count(&mut self, count: u32) -> SliderGeometry {
        self.style.set_segment_count(count);
        self.recompute()
    }

    pub fn set_section_count(&mut self, count: u32) -> SliderGeometry {
        self.style.set_section_count(count);
        self.recompute()
    }

    pub fn set_section_width(&mut self, width: f64) -> SliderGeometry {
        self.style.set_section_width(width);
        self.recompute()
    }

    pub fn set_separator_line_width(&mut self, width: f64) -> SliderGeometry {
        self.style.set_separator_line_width(width);
        self.recompute()
    }

    pub fn set_separator_line_height_difference(&mut self, difference: f64) -> SliderGeometry {
        self.style.set_separator_line_height_difference(difference);
        self.recompute()
    }

    pub fn set_variant(&mut self, variant: TileVariant) -> SliderGeometry {
        self.variant = variant;
        self.recompute()
    }

    /// Color does not affect geometry, so nothing is recomputed
    pub fn set_segment_color(&mut self, color: Rgba) {
        self.style.set_segment_color(color);
    }

    /// Disabling mid-drag cancels the drag
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled && self.tracker.is_tracking() {
            let event = self.tracker.track(GesturePhase::Cancelled, false);
            self.events.push(event);
            self.last_drag_x = None;
        }
        self.enabled = enabled;
    }

    // Input

    /// Scroll write from the host's scroll mechanism. Re-derives the value
    /// and queues `ValueChanged` when it moves.
    pub fn scroll_to(&mut self, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        let offset = self.scroll.clamp_offset(offset);
        self.write_offset(offset);
    }

    /// Feed one drag gesture sample at `(x, y)` in control coordinates.
    /// The strip follows the pointer horizontally.
    pub fn drag(&mut self, phase: GesturePhase, x: f64, y: f64) {
        if !self.enabled {
            return;
        }
        if phase != GesturePhase::Began && !self.tracker.is_tracking() {
            return;
        }

        let inside = x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height;
        let event = self.tracker.track(phase, inside);
        self.events.push(event);

        match phase {
            GesturePhase::Began => self.last_drag_x = Some(x),
            GesturePhase::Changed if x.is_finite() => {
                if let Some(previous) = self.last_drag_x.replace(x) {
                    self.scroll_to(self.offset - (x - previous));
                }
            }
            GesturePhase::Changed => {}
            GesturePhase::Ended | GesturePhase::Cancelled => self.last_drag_x = None,
        }
    }
}
