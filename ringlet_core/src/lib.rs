// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A radial (donut) chart engine.
//!
//! `ringlet_core` turns a set of named numeric sources into drawable
//! primitives for a single-ring chart:
//! - **Resolution** joins configured segments against a state snapshot.
//! - **Layout** distributes segment values as contiguous arcs, optionally
//!   separated by fixed-pixel gaps.
//! - **Color** assigns per-segment paints or samples a multi-stop gradient.
//! - **Formatting** produces center/caption/ring-label text and legend rows.
//!
//! The engine is pure and stateless: [`DonutChart::render`] maps one
//! `(config, snapshot)` pair to one immutable primitive list, every time.
//! Malformed data never escapes as an error; it degrades to fallbacks
//! (zero values, a fallback color, a "no data" placeholder).
//!
//! Rendering backends are out of scope; primitives carry everything an
//! SVG/Canvas/vector backend needs (arc angles, endpoints, text anchors).

#![no_std]

extern crate alloc;

mod angle;
mod chart;
#[cfg(test)]
mod chart_tests;
mod coerce;
mod color;
mod config;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod primitive;
mod segment;
mod snapshot;
mod z_order;

pub use angle::{ROTATION_START, gap_degrees_for_px, layout};
pub use chart::{DonutChart, RenderOutput, RenderStatus};
pub use coerce::{coerce, coerce_non_negative};
pub use color::{ColorStop, Gradient, PALETTE, Rgb, lerp, lerp_rgb};
pub use config::{
    CenterMode, CenterSecondary, ColorMode, LegendValueMode, RenderConfig, SegmentLabelMode,
    SegmentSpec,
};
pub use format::{LegendRow, format_percent, format_value, legend_rows, segment_label_text};
pub use geometry::{CANVAS_WIDTH, arc_endpoints, canvas_height, point_on_circle, separator};
pub use primitive::{Primitive, PrimitiveKind, TextAnchor, TextBaseline};
pub use segment::{Resolved, ResolvedSegment, resolve};
pub use snapshot::{EntityState, StateSnapshot, UNIT_ATTRIBUTE};
pub use z_order::*;
