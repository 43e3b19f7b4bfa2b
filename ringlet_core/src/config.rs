// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render configuration.
//!
//! [`RenderConfig`] enumerates every recognized option with a typed default,
//! replacing the dynamic key-merge config objects of dashboard cards. Out-of-range
//! numeric options are clamped to the nearest valid bound at sanitization time;
//! malformed color strings fall back. Configuration is never rejected.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::color::{Gradient, Rgb};

/// One configured data source for the ring.
///
/// Order is significant: it defines both draw order and legend order, and is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentSpec {
    /// Entity identifier to read from the snapshot.
    pub source: String,
    /// Display label; falls back to `source` when empty.
    pub label: Option<String>,
    /// Explicit hex color; falls back to the categorical palette by index.
    pub color: Option<String>,
}

impl SegmentSpec {
    /// Creates a segment for a source, with defaults for the rest.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: None,
            color: None,
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets an explicit color (hex string, sanitized at paint time).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Color assignment strategy.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorMode {
    /// Multi-segment mode: each segment painted with its explicit (or palette) color.
    PerSegment,
    /// Single-value gauge mode: the first segment's value is normalized against
    /// `[min_value, max_value]` and the arc is painted by sampling `gradient`.
    Gradient {
        /// The sampled gradient.
        gradient: Gradient,
        /// Value mapping to an empty ring.
        min_value: f64,
        /// Value mapping to a full ring.
        max_value: f64,
    },
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::PerSegment
    }
}

/// An optional second center readout, drawn below the primary line in a
/// lighter weight.
///
/// Independent of the primary line: its own source, unit, decimals, and font
/// scale. When the source is missing from the snapshot the line is simply
/// omitted; the primary line is unaffected.
#[derive(Clone, Debug, PartialEq)]
pub struct CenterSecondary {
    /// Entity identifier to read from the snapshot.
    pub source: String,
    /// Explicit unit; empty falls back to the source's attribute unit.
    pub unit: String,
    /// Value decimals.
    pub decimals: u8,
    /// Font size as a fraction of the ring radius.
    pub font_scale: f64,
}

impl CenterSecondary {
    /// Creates a secondary readout for a source, with defaults for the rest.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            unit: String::new(),
            decimals: 0,
            font_scale: 0.30,
        }
    }

    /// Sets an explicit unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets the value decimals.
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }
}

/// What the center text shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CenterMode {
    /// The aggregate total.
    #[default]
    Total,
    /// One specific source's value; its unit falls back to the source's own
    /// attribute-provided unit when no explicit center unit is configured.
    Entity(String),
    /// No center text.
    None,
}

/// Per-segment ring label content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SegmentLabelMode {
    /// No ring labels.
    None,
    /// Value only.
    #[default]
    Value,
    /// Percent only.
    Percent,
    /// `"value unit (percent%)"`.
    Both,
}

/// Legend value column content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendValueMode {
    /// Value only.
    #[default]
    Value,
    /// Percent only.
    Percent,
    /// `"value unit (percent%)"`.
    Both,
}

/// Valid option bounds, applied by [`RenderConfig::sanitized`].
pub(crate) mod bounds {
    pub(crate) const RING_RADIUS: (f64, f64) = (10.0, 120.0);
    pub(crate) const RING_WIDTH: (f64, f64) = (1.0, 60.0);
    pub(crate) const RING_OFFSET_Y: (f64, f64) = (-80.0, 80.0);
    pub(crate) const GAP_WIDTH_PX: (f64, f64) = (0.0, 32.0);
    pub(crate) const LABEL_MIN_ANGLE: (f64, f64) = (0.0, 180.0);
    pub(crate) const LABEL_OFFSET: (f64, f64) = (-60.0, 60.0);
    pub(crate) const FONT_SCALE: (f64, f64) = (0.05, 2.0);
    pub(crate) const RING_GAP: (f64, f64) = (0.0, 80.0);
    pub(crate) const OFFSET_Y: (f64, f64) = (-120.0, 120.0);
    pub(crate) const DECIMALS_MAX: u8 = 6;
    pub(crate) const FONT_WEIGHT: (u16, u16) = (100, 900);
}

/// The full configuration surface of the engine: a pure value object, replaced
/// wholesale on each configuration change.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Ordered segment descriptors.
    pub segments: Vec<SegmentSpec>,
    /// Totals below this are forced to 0 (all-or-nothing, not a floor).
    pub min_total: f64,
    /// Color assignment strategy.
    pub color_mode: ColorMode,

    /// Ring radius at the stroke center, in canvas pixels.
    pub ring_radius: f64,
    /// Ring stroke width.
    pub ring_width: f64,
    /// Vertical shift of the ring center.
    pub ring_offset_y: f64,
    /// Desired pixel width of inter-segment gaps (0 disables gaps).
    pub gap_width_px: f64,
    /// Separator stroke color; `None` matches the track color (a background stand-in).
    pub gap_color: Option<String>,
    /// Track circle color (drawn behind gauge arcs, and behind separators).
    pub track_color: String,
    /// Default text color.
    pub text_color: String,

    /// What the center shows.
    pub center_mode: CenterMode,
    /// Explicit center unit; empty means "use the source's attribute unit" in
    /// entity mode and "no unit" otherwise.
    pub center_unit: String,
    /// Center value decimals.
    pub center_decimals: u8,
    /// Center font size as a fraction of the ring radius.
    pub center_font_scale: f64,
    /// Optional second center readout below the primary line.
    pub center_secondary: Option<CenterSecondary>,

    /// Caption above the ring; empty disables it.
    pub top_label_text: String,
    /// Caption font size as a fraction of the ring radius.
    pub top_label_font_scale: f64,
    /// Caption font weight (100 to 900).
    pub top_label_weight: u16,
    /// Signed extra pixel offset applied to the caption position.
    pub top_label_offset_y: f64,
    /// Vertical gap between the ring's outer edge and the caption.
    pub label_ring_gap: f64,

    /// Ring label content.
    pub segment_label_mode: SegmentLabelMode,
    /// Ring label value decimals.
    pub segment_label_decimals: u8,
    /// Minimum visible angular span (degrees, strict) for a ring label to be drawn.
    pub segment_label_min_angle: f64,
    /// Signed radial offset of ring labels from the stroke-center radius.
    pub segment_label_offset: f64,
    /// Ring label font size as a fraction of the ring radius.
    pub segment_font_scale: f64,

    /// Whether to emit legend primitives.
    pub show_legend: bool,
    /// Legend value column content.
    pub legend_value_mode: LegendValueMode,
    /// Legend value decimals (decoupled from ring label decimals).
    pub legend_value_decimals: u8,
    /// Legend percent decimals.
    pub legend_percent_decimals: u8,
    /// Legend font size as a fraction of the ring radius.
    pub legend_font_scale: f64,
    /// Signed vertical offset of the legend block below the ring.
    pub legend_offset_y: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            min_total: 0.0,
            color_mode: ColorMode::PerSegment,
            ring_radius: 65.0,
            ring_width: 8.0,
            ring_offset_y: 0.0,
            gap_width_px: 0.0,
            gap_color: None,
            track_color: String::from("#000000"),
            text_color: String::from("#ffffff"),
            center_mode: CenterMode::Total,
            center_unit: String::new(),
            center_decimals: 0,
            center_font_scale: 0.30,
            center_secondary: None,
            top_label_text: String::new(),
            top_label_font_scale: 0.35,
            top_label_weight: 400,
            top_label_offset_y: 0.0,
            label_ring_gap: 17.0,
            segment_label_mode: SegmentLabelMode::Value,
            segment_label_decimals: 0,
            segment_label_min_angle: 12.0,
            segment_label_offset: 0.0,
            segment_font_scale: 0.15,
            show_legend: false,
            legend_value_mode: LegendValueMode::Value,
            legend_value_decimals: 0,
            legend_percent_decimals: 0,
            legend_font_scale: 0.18,
            legend_offset_y: 0.0,
        }
    }
}

impl RenderConfig {
    /// Returns a copy with every numeric option clamped to its valid bounds.
    ///
    /// [`crate::DonutChart::new`] applies this once, so the render path can rely on
    /// in-range options without re-validating.
    pub fn sanitized(&self) -> Self {
        let clamp = |v: f64, (lo, hi): (f64, f64)| {
            if v.is_finite() { v.clamp(lo, hi) } else { lo }
        };
        let mut c = self.clone();
        c.min_total = c.min_total.max(0.0);
        c.ring_radius = clamp(c.ring_radius, bounds::RING_RADIUS);
        c.ring_width = clamp(c.ring_width, bounds::RING_WIDTH);
        c.ring_offset_y = clamp(c.ring_offset_y, bounds::RING_OFFSET_Y);
        c.gap_width_px = clamp(c.gap_width_px, bounds::GAP_WIDTH_PX);
        c.center_decimals = c.center_decimals.min(bounds::DECIMALS_MAX);
        c.center_font_scale = clamp(c.center_font_scale, bounds::FONT_SCALE);
        if let Some(secondary) = &mut c.center_secondary {
            secondary.decimals = secondary.decimals.min(bounds::DECIMALS_MAX);
            secondary.font_scale = clamp(secondary.font_scale, bounds::FONT_SCALE);
        }
        c.top_label_font_scale = clamp(c.top_label_font_scale, bounds::FONT_SCALE);
        c.top_label_weight = c
            .top_label_weight
            .clamp(bounds::FONT_WEIGHT.0, bounds::FONT_WEIGHT.1);
        c.top_label_offset_y = clamp(c.top_label_offset_y, bounds::OFFSET_Y);
        c.label_ring_gap = clamp(c.label_ring_gap, bounds::RING_GAP);
        c.segment_label_decimals = c.segment_label_decimals.min(bounds::DECIMALS_MAX);
        c.segment_label_min_angle = clamp(c.segment_label_min_angle, bounds::LABEL_MIN_ANGLE);
        c.segment_label_offset = clamp(c.segment_label_offset, bounds::LABEL_OFFSET);
        c.segment_font_scale = clamp(c.segment_font_scale, bounds::FONT_SCALE);
        c.legend_value_decimals = c.legend_value_decimals.min(bounds::DECIMALS_MAX);
        c.legend_percent_decimals = c.legend_percent_decimals.min(bounds::DECIMALS_MAX);
        c.legend_font_scale = clamp(c.legend_font_scale, bounds::FONT_SCALE);
        c.legend_offset_y = clamp(c.legend_offset_y, bounds::OFFSET_Y);
        if let ColorMode::Gradient {
            min_value,
            max_value,
            ..
        } = &mut c.color_mode
        {
            if !min_value.is_finite() {
                *min_value = 0.0;
            }
            if !max_value.is_finite() {
                *max_value = 100.0;
            }
        }
        c
    }

    /// The sanitized track color.
    pub fn track_rgb(&self) -> Rgb {
        Rgb::sanitize(&self.track_color)
    }

    /// The sanitized text color.
    pub fn text_rgb(&self) -> Rgb {
        Rgb::sanitize(&self.text_color)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn out_of_range_options_are_clamped_not_rejected() {
        let mut config = RenderConfig {
            ring_radius: 9999.0,
            ring_width: -4.0,
            gap_width_px: 100.0,
            center_decimals: 42,
            segment_label_min_angle: -30.0,
            min_total: -5.0,
            top_label_weight: 1000,
            ..RenderConfig::default()
        };
        config.segment_font_scale = f64::NAN;

        let c = config.sanitized();
        assert_eq!(c.ring_radius, bounds::RING_RADIUS.1);
        assert_eq!(c.ring_width, bounds::RING_WIDTH.0);
        assert_eq!(c.gap_width_px, bounds::GAP_WIDTH_PX.1);
        assert_eq!(c.center_decimals, bounds::DECIMALS_MAX);
        assert_eq!(c.segment_label_min_angle, 0.0);
        assert_eq!(c.min_total, 0.0);
        assert_eq!(c.segment_font_scale, bounds::FONT_SCALE.0);
        assert_eq!(c.top_label_weight, bounds::FONT_WEIGHT.1);
    }

    #[test]
    fn secondary_readout_is_clamped_in_place() {
        let mut secondary = CenterSecondary::new("sensor.energy").with_decimals(99);
        secondary.font_scale = f64::INFINITY;
        let config = RenderConfig {
            center_secondary: Some(secondary),
            ..RenderConfig::default()
        };
        let c = config.sanitized();
        let secondary = c.center_secondary.expect("readout should survive");
        assert_eq!(secondary.decimals, bounds::DECIMALS_MAX);
        assert_eq!(secondary.font_scale, bounds::FONT_SCALE.0);
    }

    #[test]
    fn defaults_are_already_in_range() {
        let config = RenderConfig::default();
        assert_eq!(config.sanitized(), config);
    }

    #[test]
    fn non_finite_gauge_bounds_reset() {
        let config = RenderConfig {
            color_mode: ColorMode::Gradient {
                gradient: Gradient::from_stops([(0.0, "#ff0000"), (1.0, "#00ff00")]),
                min_value: f64::NAN,
                max_value: f64::INFINITY,
            },
            ..RenderConfig::default()
        };
        let ColorMode::Gradient {
            min_value,
            max_value,
            ..
        } = config.sanitized().color_mode
        else {
            panic!("mode should survive sanitization");
        };
        assert_eq!(min_value, 0.0);
        assert_eq!(max_value, 100.0);
    }
}
