//! Visual style of the segment strip
//!
//! Every setter clamps silently; there is no invalid style.

use crate::Rgba;

/// Minimum separator line width in points
pub const MIN_SEPARATOR_LINE_WIDTH: f64 = 1.0;

/// Spacing between separators before any section-width fill is applied
pub const BASE_SEPARATOR_SPACING: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStyle {
    segment_count: u32,
    section_count: u32,
    section_width: f64,
    separator_line_width: f64,
    separator_line_height_difference: f64,
    segment_color: Rgba,
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self {
            segment_count: 4,
            section_count: 1,
            section_width: 0.0,
            separator_line_width: 2.0,
            separator_line_height_difference: 0.0,
            segment_color: Rgba::WHITE,
        }
    }
}

impl SegmentStyle {
    /// Number of segments in each section (at least 1)
    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    /// Number of sections the range is divided into (at least 1)
    pub fn section_count(&self) -> u32 {
        self.section_count
    }

    /// Requested section width; widths below the minimum are ignored by the layout
    pub fn section_width(&self) -> f64 {
        self.section_width
    }

    pub fn separator_line_width(&self) -> f64 {
        self.separator_line_width
    }

    pub fn separator_line_height_difference(&self) -> f64 {
        self.separator_line_height_difference
    }

    pub fn segment_color(&self) -> Rgba {
        self.segment_color
    }

    /// Corner radius of every separator cap
    pub fn corner_radius(&self) -> f64 {
        self.separator_line_width / 2.0
    }

    pub fn set_segment_count(&mut self, count: u32) {
        self.segment_count = count.max(1);
    }

    pub fn set_section_count(&mut self, count: u32) {
        self.section_count = count.max(1);
    }

    pub fn set_section_width(&mut self, width: f64) {
        self.section_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    }

    /// Set the line width; also re-clamps the height difference to `-width`
    pub fn set_separator_line_width(&mut self, width: f64) {
        self.separator_line_width = if width.is_finite() {
            width.max(MIN_SEPARATOR_LINE_WIDTH)
        } else {
            MIN_SEPARATOR_LINE_WIDTH
        };

        if self.separator_line_height_difference < -self.separator_line_width {
            self.separator_line_height_difference = -self.separator_line_width;
        }
    }

    /// Set the height difference between section and segment separators.
    /// Values below `-separator_line_width` would invert the caps and are clamped.
    pub fn set_separator_line_height_difference(&mut self, difference: f64) {
        let difference = if difference.is_finite() { difference } else { 0.0 };
        self.separator_line_height_difference = difference.max(-self.separator_line_width);
    }

    pub fn set_segment_color(&mut self, color: Rgba) {
        self.segment_color = color;
    }
}
