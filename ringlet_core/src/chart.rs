// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed donut chart.
//!
//! [`DonutChart::render`] is the whole engine surface: a pure, synchronous map from
//! `(config, snapshot)` to an immutable primitive list. Identical inputs always
//! produce identical output; there is no cross-call state and no I/O.
//!
//! Failure semantics: data errors (bad state strings, missing sources) degrade to
//! fallbacks and never surface as errors. An empty segment list or an entirely
//! unavailable source set is an explicit "no data" presentation state, reported via
//! [`RenderStatus::NoData`] alongside a placeholder primitive.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::angle::{ROTATION_START, gap_degrees_for_px, layout};
use crate::coerce::coerce;
use crate::color::{Gradient, Rgb};
use crate::config::{CenterMode, ColorMode, RenderConfig, SegmentLabelMode};
use crate::format::{LegendRow, format_value, legend_rows, segment_label_text};
use crate::geometry::{CANVAS_WIDTH, canvas_height, point_on_circle, separator};
use crate::primitive::{Primitive, TextAnchor, TextBaseline};
use crate::segment::{ResolvedSegment, resolve};
use crate::snapshot::StateSnapshot;
use crate::z_order;

/// Number of mini-arcs a gradient gauge arc is subdivided into.
const GRADIENT_ARC_STEPS: usize = 140;

/// Track circle opacity in gauge mode.
const TRACK_ALPHA: f32 = 0.25;

/// Font size of the "no data" placeholder.
const PLACEHOLDER_FONT_SIZE: f64 = 16.0;

/// Default font weight for labels, legend text, and the placeholder.
const TEXT_WEIGHT: u16 = 400;
/// Font weight of the primary center line.
const CENTER_PRIMARY_WEIGHT: u16 = 400;
/// Font weight of the secondary center line, lighter than the primary.
const CENTER_SECONDARY_WEIGHT: u16 = 300;

/// Center line vertical placement, as fractions of the ring radius.
const CENTER_PRIMARY_OFFSET: f64 = -0.05;
const CENTER_SECONDARY_OFFSET: f64 = 0.35;

/// Gap between the ring's outer edge and the legend block.
const LEGEND_TOP_GAP: f64 = 16.0;
/// Legend side margin inside the canvas.
const LEGEND_MARGIN_X: f64 = 24.0;

/// Whether the render produced chart content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    /// A chart was produced (possibly an empty ring when the total is 0).
    Ok,
    /// Nothing to render: no segments configured, or no referenced source exists.
    NoData,
}

/// The output of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOutput {
    /// The drawing surface extent (fixed width, radius-scaled height).
    pub view_box: Rect,
    /// Drawable primitives; backends sort by `(z_index, emission order)`.
    pub primitives: Vec<Primitive>,
    /// Structured legend rows (also emitted as primitives when the legend is shown).
    pub legend: Vec<LegendRow>,
    /// Whether chart content was produced.
    pub status: RenderStatus,
}

/// A donut chart with a sanitized configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutChart {
    config: RenderConfig,
}

impl DonutChart {
    /// Creates a chart, clamping every configuration option to its valid bounds.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    /// The sanitized configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders one frame from a snapshot.
    pub fn render(&self, snapshot: &StateSnapshot) -> RenderOutput {
        let c = &self.config;
        let height = canvas_height(c.ring_radius, c.ring_width);
        let center = Point::new(CANVAS_WIDTH * 0.5, height * 0.5 + c.ring_offset_y);
        let view_box = Rect::new(0.0, 0.0, CANVAS_WIDTH, height);

        if c.segments.is_empty() {
            return self.no_data(view_box, center, "no segments configured");
        }

        match &c.color_mode {
            ColorMode::PerSegment => self.render_pie(snapshot, view_box, center),
            ColorMode::Gradient {
                gradient,
                min_value,
                max_value,
            } => self.render_gauge(snapshot, view_box, center, gradient, *min_value, *max_value),
        }
    }

    fn no_data(&self, view_box: Rect, center: Point, message: &str) -> RenderOutput {
        let mut primitives = Vec::new();
        primitives.push(Primitive::text(
            z_order::CENTER_TEXT,
            center,
            message,
            PLACEHOLDER_FONT_SIZE,
            TEXT_WEIGHT,
            self.config.text_rgb().to_color(),
            TextAnchor::Middle,
            TextBaseline::Middle,
        ));
        RenderOutput {
            view_box,
            primitives,
            legend: Vec::new(),
            status: RenderStatus::NoData,
        }
    }

    fn render_pie(&self, snapshot: &StateSnapshot, view_box: Rect, center: Point) -> RenderOutput {
        let c = &self.config;
        let resolved = resolve(&c.segments, snapshot, c.min_total);
        if resolved.all_unavailable() {
            return self.no_data(view_box, center, "no data");
        }

        let mut segments = resolved.segments;
        let total = resolved.total;
        let gap_degrees = if c.gap_width_px > 0.0 {
            gap_degrees_for_px(c.gap_width_px, c.ring_radius)
        } else {
            0.0
        };
        let boundaries = layout(&mut segments, total, gap_degrees);

        let mut primitives = Vec::new();

        for segment in segments.iter().filter(|s| s.is_drawable()) {
            primitives.push(Primitive::arc(
                z_order::ARCS,
                center,
                c.ring_radius,
                segment.start_angle,
                segment.end_angle,
                c.ring_width,
                segment.color.to_color(),
            ));
        }

        let drawn = segments.iter().filter(|s| s.is_drawable()).count();
        if c.gap_width_px > 0.0 && drawn >= 2 {
            let color = c
                .gap_color
                .as_deref()
                .map(Rgb::sanitize)
                .unwrap_or_else(|| c.track_rgb())
                .to_color();
            let inner = c.ring_radius - c.ring_width * 0.5;
            let outer = c.ring_radius + c.ring_width * 0.5;
            for &angle in &boundaries {
                let (p0, p1) = separator(center, inner, outer, angle);
                primitives.push(Primitive::line(
                    z_order::SEPARATORS,
                    p0,
                    p1,
                    c.gap_width_px,
                    color,
                ));
            }
        }

        if total > 0.0 && c.segment_label_mode != SegmentLabelMode::None {
            self.push_ring_labels(&mut primitives, &segments, total, center);
        }

        let legend = legend_rows(
            &segments,
            total,
            c.legend_value_mode,
            c.legend_value_decimals,
            c.legend_percent_decimals,
        );
        let mut view_box = view_box;
        if c.show_legend && !legend.is_empty() {
            let bottom = self.push_legend(&mut primitives, &legend, center);
            view_box.y1 = view_box.y1.max(bottom + LEGEND_TOP_GAP);
        }

        let primary = self.center_text(total, snapshot);
        self.push_center_texts(&mut primitives, center, primary, snapshot);
        self.push_caption(&mut primitives, center);

        RenderOutput {
            view_box,
            primitives,
            legend,
            status: RenderStatus::Ok,
        }
    }

    fn render_gauge(
        &self,
        snapshot: &StateSnapshot,
        view_box: Rect,
        center: Point,
        gradient: &Gradient,
        min_value: f64,
        max_value: f64,
    ) -> RenderOutput {
        let c = &self.config;
        let source = &c.segments[0].source;
        let Some(entity) = snapshot.get(source) else {
            return self.no_data(view_box, center, &format!("entity not found: {source}"));
        };

        let value = coerce(Some(&entity.state), 0.0);
        let fraction = ((value - min_value) / (max_value - min_value).max(1e-9)).clamp(0.0, 1.0);
        let span = fraction * 360.0;

        let mut primitives = Vec::new();
        primitives.push(Primitive::arc(
            z_order::TRACK,
            center,
            c.ring_radius,
            ROTATION_START,
            ROTATION_START + 360.0,
            c.ring_width,
            c.track_rgb().to_color_with_alpha(TRACK_ALPHA),
        ));

        if span > 0.0 {
            let start = ROTATION_START;
            let end = start + span;
            let steps = GRADIENT_ARC_STEPS as f64;
            for i in 0..GRADIENT_ARC_STEPS {
                let a0 = start + (i as f64 / steps) * span;
                let a1 = start + ((i + 1) as f64 / steps) * span;
                if a1 > end + 1e-9 {
                    break;
                }
                // Sample at the mini-arc midpoint's full-circle fraction, so the
                // gradient is anchored to the dial, not stretched over the value arc.
                let t = ((a0 + a1) * 0.5 - ROTATION_START) / 360.0;
                primitives.push(Primitive::arc(
                    z_order::ARCS,
                    center,
                    c.ring_radius,
                    a0,
                    a1,
                    c.ring_width,
                    gradient.sample(t).to_color(),
                ));
            }
        }

        let primary = match &c.center_mode {
            CenterMode::None => None,
            CenterMode::Total => Some(self.value_with_center_unit(value, entity.unit())),
            CenterMode::Entity(id) => self.entity_center_text(id, snapshot),
        };
        self.push_center_texts(&mut primitives, center, primary, snapshot);
        self.push_caption(&mut primitives, center);

        RenderOutput {
            view_box,
            primitives,
            legend: Vec::new(),
            status: RenderStatus::Ok,
        }
    }

    fn push_ring_labels(
        &self,
        primitives: &mut Vec<Primitive>,
        segments: &[ResolvedSegment],
        total: f64,
        center: Point,
    ) {
        let c = &self.config;
        for segment in segments {
            // Strictly greater: a span exactly at the threshold is excluded.
            if segment.span() <= c.segment_label_min_angle {
                continue;
            }
            let Some(text) = segment_label_text(
                c.segment_label_mode,
                segment,
                total,
                c.segment_label_decimals,
            ) else {
                continue;
            };
            let mid = (segment.start_angle + segment.end_angle) * 0.5;
            let pos = point_on_circle(center, c.ring_radius + c.segment_label_offset, mid);
            primitives.push(Primitive::text(
                z_order::SEGMENT_LABELS,
                pos,
                text,
                c.ring_radius * c.segment_font_scale,
                TEXT_WEIGHT,
                c.text_rgb().to_color(),
                TextAnchor::Middle,
                TextBaseline::Middle,
            ));
        }
    }

    /// Emits legend primitives and returns the bottom y of the block.
    fn push_legend(
        &self,
        primitives: &mut Vec<Primitive>,
        rows: &[LegendRow],
        center: Point,
    ) -> f64 {
        let c = &self.config;
        let font_size = c.ring_radius * c.legend_font_scale;
        let row_height = font_size * 1.6;
        let swatch = font_size * 0.9;
        let x0 = LEGEND_MARGIN_X;
        let x1 = CANVAS_WIDTH - LEGEND_MARGIN_X;
        let top =
            center.y + c.ring_radius + c.ring_width * 0.5 + LEGEND_TOP_GAP + c.legend_offset_y;

        let text_color = c.text_rgb().to_color();
        for (i, row) in rows.iter().enumerate() {
            let y = top + i as f64 * row_height;
            let label_color = if row.available {
                text_color
            } else {
                text_color.with_alpha(0.5)
            };

            primitives.push(Primitive::rect(
                z_order::LEGEND_SWATCHES,
                Rect::new(
                    x0,
                    y + (row_height - swatch) * 0.5,
                    x0 + swatch,
                    y + (row_height + swatch) * 0.5,
                ),
                row.color.to_color(),
            ));
            primitives.push(Primitive::text(
                z_order::LEGEND_LABELS,
                Point::new(x0 + swatch + 8.0, y + row_height * 0.5),
                row.label.clone(),
                font_size,
                TEXT_WEIGHT,
                label_color,
                TextAnchor::Start,
                TextBaseline::Middle,
            ));
            primitives.push(Primitive::text(
                z_order::LEGEND_LABELS,
                Point::new(x1, y + row_height * 0.5),
                row.value_text.clone(),
                font_size,
                TEXT_WEIGHT,
                label_color,
                TextAnchor::End,
                TextBaseline::Middle,
            ));
        }
        top + rows.len() as f64 * row_height
    }

    /// Emits the center block: the primary line slightly above true center and,
    /// when configured and resolvable, the lighter secondary line below it.
    ///
    /// [`CenterMode::None`] disables the whole block, secondary line included.
    fn push_center_texts(
        &self,
        primitives: &mut Vec<Primitive>,
        center: Point,
        primary: Option<String>,
        snapshot: &StateSnapshot,
    ) {
        let c = &self.config;
        if let Some(text) = primary {
            primitives.push(Primitive::text(
                z_order::CENTER_TEXT,
                Point::new(center.x, center.y + c.ring_radius * CENTER_PRIMARY_OFFSET),
                text,
                c.ring_radius * c.center_font_scale,
                CENTER_PRIMARY_WEIGHT,
                c.text_rgb().to_color(),
                TextAnchor::Middle,
                TextBaseline::Middle,
            ));
        }
        if c.center_mode == CenterMode::None {
            return;
        }
        let Some(secondary) = &c.center_secondary else {
            return;
        };
        // A missing secondary source drops the line, not the render.
        let Some(entity) = snapshot.get(&secondary.source) else {
            return;
        };
        let value = coerce(Some(&entity.state), 0.0);
        let unit = if secondary.unit.is_empty() {
            entity.unit().unwrap_or("")
        } else {
            &secondary.unit
        };
        let v = format_value(value, secondary.decimals);
        let text = if unit.is_empty() {
            v
        } else {
            format!("{v} {unit}")
        };
        primitives.push(Primitive::text(
            z_order::CENTER_TEXT,
            Point::new(center.x, center.y + c.ring_radius * CENTER_SECONDARY_OFFSET),
            text,
            c.ring_radius * secondary.font_scale,
            CENTER_SECONDARY_WEIGHT,
            c.text_rgb().to_color(),
            TextAnchor::Middle,
            TextBaseline::Middle,
        ));
    }

    fn center_text(&self, total: f64, snapshot: &StateSnapshot) -> Option<String> {
        match &self.config.center_mode {
            CenterMode::None => None,
            CenterMode::Total => Some(self.value_with_center_unit(total, None)),
            CenterMode::Entity(id) => self.entity_center_text(id, snapshot),
        }
    }

    /// Center text for one specific source; its unit falls back to the source's own
    /// attribute unit when no explicit center unit is configured.
    fn entity_center_text(&self, id: &str, snapshot: &StateSnapshot) -> Option<String> {
        let entity = snapshot.get(id);
        let value = coerce(entity.map(|e| e.state.as_str()), 0.0);
        Some(self.value_with_center_unit(value, entity.and_then(|e| e.unit())))
    }

    fn value_with_center_unit(&self, value: f64, fallback_unit: Option<&str>) -> String {
        let c = &self.config;
        let unit = if c.center_unit.is_empty() {
            fallback_unit.unwrap_or("")
        } else {
            &c.center_unit
        };
        let v = format_value(value, c.center_decimals);
        if unit.is_empty() {
            v
        } else {
            format!("{v} {unit}")
        }
    }

    fn push_caption(&self, primitives: &mut Vec<Primitive>, center: Point) {
        let c = &self.config;
        if c.top_label_text.trim().is_empty() {
            return;
        }
        let font_size = c.ring_radius * c.top_label_font_scale;
        let y = (center.y - c.ring_radius)
            - c.ring_width * 0.8
            - font_size * 0.25
            - c.label_ring_gap
            + c.top_label_offset_y;
        primitives.push(Primitive::text(
            z_order::CAPTION,
            Point::new(center.x, y),
            c.top_label_text.clone(),
            font_size,
            c.top_label_weight,
            c.text_rgb().to_color(),
            TextAnchor::Middle,
            TextBaseline::Middle,
        ));
    }
}
