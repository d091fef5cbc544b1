//! Terminal rendition of the replicated segment strip
//!
//! Each column samples the tile layout at the content position under its
//! center, so the repetition described by the layout's replication
//! parameters is realized cell by cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};
use segslider_core::{MarkKind, SegmentedSlider};

use crate::input::CellMetrics;
use crate::theme::{blend, Theme};

const BOUNDARY_SYMBOL: &str = "┃";
const SEGMENT_SYMBOL: &str = "│";
const INDICATOR_SYMBOL: &str = "█";

pub struct SegmentStrip<'a> {
    slider: &'a SegmentedSlider,
    theme: &'a Theme,
    metrics: CellMetrics,
}

impl<'a> SegmentStrip<'a> {
    pub fn new(slider: &'a SegmentedSlider, theme: &'a Theme, metrics: CellMetrics) -> Self {
        Self {
            slider,
            theme,
            metrics,
        }
    }
}

/// Rows a mark spans when its height is `fraction` of the canvas
fn rows_for(fraction: f64, height: u16) -> u16 {
    let rows = (fraction * height as f64).round();
    (rows.max(1.0) as u16).min(height)
}

impl Widget for SegmentStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let background = Style::default().bg(self.theme.background);
        buf.set_style(area, background);

        let tile = self.slider.tile();
        let color = self.slider.style().segment_color();
        let enabled = self.slider.is_enabled();
        let boundary_rows = rows_for(tile.height / tile.canvas_height, area.height);
        let segment_rows = rows_for(tile.segment_height / tile.canvas_height, area.height);
        // Marks narrower than a cell still land on their nearest column
        let tolerance = ((self.metrics.column_points - tile.line_width) / 2.0).max(0.0);

        for column in 0..area.width {
            let control_x = (column as f64 + 0.5) * self.metrics.column_points;
            let content_x = self.slider.offset() + control_x;
            let Some(hit) = tile.mark_at(content_x, tolerance) else {
                continue;
            };

            let fg = if enabled {
                let opacity = hit.mark.kind.opacity() * tile.replication.opacity(hit.instance);
                blend(color, opacity, self.theme.background)
            } else {
                self.theme.disabled
            };
            let (symbol, rows) = match hit.mark.kind {
                MarkKind::Boundary => (BOUNDARY_SYMBOL, boundary_rows),
                MarkKind::Segment => (SEGMENT_SYMBOL, segment_rows),
            };

            let top = (area.height - rows) / 2;
            for row in top..top + rows {
                buf.set_string(area.x + column, area.y + row, symbol, background.fg(fg));
            }
        }

        let indicator = self.slider.indicator();
        let center = indicator.x + indicator.width / 2.0;
        let column = ((center / self.metrics.column_points).floor().max(0.0) as u16)
            .min(area.width - 1);
        let style = background.fg(self.theme.indicator);
        for row in 0..area.height {
            buf.set_string(area.x + column, area.y + row, INDICATOR_SYMBOL, style);
        }
    }
}
