// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value, percent, and legend text formatting.
//!
//! Decimal counts are configuration-driven and independent per surface (ring labels,
//! legend values, legend percents, center text). Percentages are always computed
//! against the effective total; when the total is 0 no per-segment text exists at all,
//! which callers enforce by not asking.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::color::Rgb;
use crate::config::{LegendValueMode, SegmentLabelMode};
use crate::segment::ResolvedSegment;

/// Formats a value with a fixed number of decimals.
pub fn format_value(value: f64, decimals: u8) -> String {
    format!("{value:.prec$}", prec = decimals as usize)
}

/// Formats `value / total` as a percentage with a fixed number of decimals
/// (without the `%` sign).
///
/// Callers must not ask for percentages of a non-positive total.
pub fn format_percent(value: f64, total: f64, decimals: u8) -> String {
    debug_assert!(total > 0.0, "percent of a non-positive total");
    let percent = if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    };
    format_value(percent, decimals)
}

fn value_with_unit(value: f64, unit: &str, decimals: u8) -> String {
    let v = format_value(value, decimals);
    if unit.is_empty() {
        v
    } else {
        format!("{v} {unit}")
    }
}

fn combined(value: f64, unit: &str, total: f64, value_decimals: u8, percent_decimals: u8) -> String {
    format!(
        "{} ({}%)",
        value_with_unit(value, unit, value_decimals),
        format_percent(value, total, percent_decimals)
    )
}

/// Renders a ring label for one segment, or `None` when the mode disables labels.
///
/// Ring labels share one decimal count for both value and percent; the legend has
/// independent counts.
pub fn segment_label_text(
    mode: SegmentLabelMode,
    segment: &ResolvedSegment,
    total: f64,
    decimals: u8,
) -> Option<String> {
    match mode {
        SegmentLabelMode::None => None,
        SegmentLabelMode::Value => Some(value_with_unit(segment.value, &segment.unit, decimals)),
        SegmentLabelMode::Percent => {
            Some(format!("{}%", format_percent(segment.value, total, decimals)))
        }
        SegmentLabelMode::Both => Some(combined(
            segment.value,
            &segment.unit,
            total,
            decimals,
            decimals,
        )),
    }
}

/// One legend row: swatch color, label, and a right-aligned value string.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    /// Display label (falls back to the raw source identifier upstream).
    pub label: String,
    /// Swatch color.
    pub color: Rgb,
    /// Formatted value/percent/both string.
    pub value_text: String,
    /// Whether the backing source was present in the snapshot.
    pub available: bool,
}

/// Builds legend rows mirroring segment order (never re-sorted by value).
///
/// A non-positive total yields no rows: below the minimum-total gate the data is
/// hidden, not partially shown.
pub fn legend_rows(
    segments: &[ResolvedSegment],
    total: f64,
    mode: LegendValueMode,
    value_decimals: u8,
    percent_decimals: u8,
) -> Vec<LegendRow> {
    if total <= 0.0 {
        return Vec::new();
    }
    segments
        .iter()
        .map(|segment| {
            let value_text = match mode {
                LegendValueMode::Value => {
                    value_with_unit(segment.value, &segment.unit, value_decimals)
                }
                LegendValueMode::Percent => {
                    format!("{}%", format_percent(segment.value, total, percent_decimals))
                }
                LegendValueMode::Both => combined(
                    segment.value,
                    &segment.unit,
                    total,
                    value_decimals,
                    percent_decimals,
                ),
            };
            LegendRow {
                label: segment.label.clone(),
                color: segment.color,
                value_text,
                available: segment.available,
            }
        })
        .collect()
}
