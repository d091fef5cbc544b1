//! Tile layout for the segment strip
//!
//! One tile ("unit") is a section separator followed by `segment_count`
//! segment separators. The strip is drawn by repeating the unit with a fixed
//! translation step. Nothing here draws: the layout exposes the unit shape,
//! an optional coverage bitmap and the replication parameters, and the host
//! renderer realizes the repetition.
//!
//! Content coordinates put the center of the first section separator at 0
//! and the center of the last one at `content_width`.

use serde::{Deserialize, Serialize};

use crate::style::{SegmentStyle, BASE_SEPARATOR_SPACING};

/// Opacity of the dimmed replicas drawn past either end of the content
pub const EDGE_OPACITY: f64 = 0.35;

/// Opacity of segment separators relative to section separators
pub const SEGMENT_OPACITY: f64 = 0.7;

/// How the unit closes on its trailing side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileVariant {
    /// Leading separator only; units abut after the trailing spacing
    #[default]
    Section,
    /// Leading and trailing separators; neighbouring units share the edge separator
    ReplicatedEdge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkKind {
    /// Section separator, full unit height
    Boundary,
    /// Segment separator, centered and `2r + 1` tall
    Segment,
}

impl MarkKind {
    pub fn opacity(self) -> f64 {
        match self {
            MarkKind::Boundary => 1.0,
            MarkKind::Segment => SEGMENT_OPACITY,
        }
    }
}

/// A rounded-rectangle separator inside one unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mark {
    pub kind: MarkKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl Mark {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Point-in-rounded-rectangle test in unit coordinates
    pub fn contains(&self, px: f64, py: f64) -> bool {
        if px < self.x || px > self.x + self.width || py < self.y || py > self.y + self.height {
            return false;
        }
        let r = self
            .corner_radius
            .min(self.width / 2.0)
            .min(self.height / 2.0)
            .max(0.0);
        let cx = px.clamp(self.x + r, self.x + self.width - r);
        let cy = py.clamp(self.y + r, self.y + self.height - r);
        let (dx, dy) = (px - cx, py - cy);
        dx * dx + dy * dy <= r * r
    }
}

/// How many copies of the unit to draw and where
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Replication {
    /// Copies covering the content, one per section
    pub section_instances: u32,
    /// Dimmed copies on each side, enough to fill a viewport
    pub edge_instances: u32,
    /// Translation between consecutive copies
    pub step: f64,
    /// Content x of the first copy's left edge
    pub origin_x: f64,
}

impl Replication {
    pub fn count(&self) -> u32 {
        self.section_instances
            .saturating_add(self.edge_instances.saturating_mul(2))
    }

    /// Content x of the left edge of copy `index`
    pub fn instance_x(&self, index: u32) -> f64 {
        self.origin_x + index as f64 * self.step
    }

    pub fn is_edge(&self, index: u32) -> bool {
        index < self.edge_instances
            || index >= self.edge_instances.saturating_add(self.section_instances)
    }

    pub fn opacity(&self, index: u32) -> f64 {
        if self.is_edge(index) {
            EDGE_OPACITY
        } else {
            1.0
        }
    }
}

/// Result of sampling the replicated strip at one content position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkHit {
    pub mark: Mark,
    pub instance: u32,
    pub edge: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayout {
    pub variant: TileVariant,
    pub unit_width: f64,
    /// Effective spacing between separators, after the section-width fill
    pub spacing: f64,
    pub line_width: f64,
    pub corner_radius: f64,
    pub segment_height: f64,
    /// Height of the section separators
    pub height: f64,
    /// Bitmap height; taller than `height` when segments outgrow the separators
    pub canvas_height: f64,
    pub marks: Vec<Mark>,
    pub replication: Replication,
    pub content_width: f64,
    /// Horizontal distance between neighbouring separator centers
    pub segment_center_delta: f64,
}

impl TileLayout {
    pub fn compute(style: &SegmentStyle, variant: TileVariant, viewport_width: f64) -> Self {
        let n = style.segment_count() as f64;
        let lw = style.separator_line_width();
        let boundaries = match variant {
            TileVariant::Section => 1.0,
            TileVariant::ReplicatedEdge => 2.0,
        };

        let fixed = (boundaries + n) * lw;
        let mut spacing = BASE_SEPARATOR_SPACING;
        let mut unit_width = fixed + (n + 1.0) * spacing;
        // Fill the requested section width rather than truncating to it
        if unit_width < style.section_width() {
            spacing = (style.section_width() - fixed) / (n + 1.0);
            unit_width = style.section_width();
        }

        let corner_radius = lw / 2.0;
        let segment_height = 2.0 * corner_radius + 1.0;
        let difference = style.separator_line_height_difference().max(-lw);
        let height = segment_height + difference;
        let canvas_height = height.max(segment_height);

        let boundary_y = (canvas_height - height) / 2.0;
        let segment_y = (canvas_height - segment_height) / 2.0;
        let boundary = |x: f64| Mark {
            kind: MarkKind::Boundary,
            x,
            y: boundary_y,
            width: lw,
            height,
            corner_radius,
        };

        let mut marks = Vec::with_capacity(style.segment_count() as usize + 2);
        marks.push(boundary(0.0));
        let mut x = lw;
        for _ in 0..style.segment_count() {
            x += spacing;
            marks.push(Mark {
                kind: MarkKind::Segment,
                x,
                y: segment_y,
                width: lw,
                height: segment_height,
                corner_radius,
            });
            x += lw;
        }
        if variant == TileVariant::ReplicatedEdge {
            x += spacing;
            marks.push(boundary(x));
        }

        let step = match variant {
            TileVariant::Section => unit_width,
            TileVariant::ReplicatedEdge => unit_width - lw,
        };

        // Total copy count must stay addressable by a u32 index
        let max_edge = (u32::MAX - style.section_count()) / 2;
        let edge_instances = if viewport_width.is_finite() && viewport_width > 0.0 {
            ((viewport_width / unit_width).ceil() as u32).min(max_edge)
        } else {
            0
        };

        let replication = Replication {
            section_instances: style.section_count(),
            edge_instances,
            step,
            origin_x: -(edge_instances as f64) * step - corner_radius,
        };

        Self {
            variant,
            unit_width,
            spacing,
            line_width: lw,
            corner_radius,
            segment_height,
            height,
            canvas_height,
            marks,
            replication,
            content_width: style.section_count() as f64 * step,
            segment_center_delta: lw + spacing,
        }
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Find the mark covering content position `x`, widened by `tolerance`
    /// on both sides. The nearest mark center wins when several qualify.
    pub fn mark_at(&self, x: f64, tolerance: f64) -> Option<MarkHit> {
        let rep = &self.replication;
        if rep.step <= 0.0 || !x.is_finite() {
            return None;
        }

        let tolerance = if tolerance.is_finite() { tolerance.max(0.0) } else { 0.0 };

        // Copies whose unit span, widened by the tolerance, covers x
        let first = ((x - tolerance - self.unit_width - rep.origin_x) / rep.step)
            .ceil()
            .max(0.0);
        let last = ((x + tolerance - rep.origin_x) / rep.step)
            .floor()
            .min(rep.count() as f64 - 1.0);
        if first > last {
            return None;
        }

        let mut best: Option<(f64, MarkHit)> = None;
        for index in first as u32..=last as u32 {
            let local = x - rep.instance_x(index);

            for mark in &self.marks {
                let distance = (local - mark.center_x()).abs();
                if distance > mark.width / 2.0 + tolerance {
                    continue;
                }
                if best.map_or(true, |(d, _)| distance < d) {
                    best = Some((
                        distance,
                        MarkHit {
                            mark: *mark,
                            instance: index,
                            edge: rep.is_edge(index),
                        },
                    ));
                }
            }
        }

        best.map(|(_, hit)| hit)
    }

    /// Rasterize one unit into an alpha coverage bitmap at `scale` pixels per point
    pub fn rasterize(&self, scale: f64) -> TileBitmap {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        let width = (self.unit_width * scale).ceil() as usize;
        let height = (self.canvas_height * scale).ceil() as usize;
        let mut alpha = vec![0u8; width * height];

        for row in 0..height {
            let py = (row as f64 + 0.5) / scale;
            for col in 0..width {
                let px = (col as f64 + 0.5) / scale;
                let coverage = self
                    .marks
                    .iter()
                    .filter(|m| m.contains(px, py))
                    .map(|m| m.kind.opacity())
                    .fold(0.0, f64::max);
                alpha[row * width + col] = (coverage * 255.0).round() as u8;
            }
        }

        TileBitmap { width, height, alpha }
    }
}

/// Alpha-only bitmap of one unit; the host tints it with the segment color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBitmap {
    width: usize,
    height: usize,
    alpha: Vec<u8>,
}

impl TileBitmap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn alpha(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.alpha.get(y * self.width + x).copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.alpha
    }
}
