// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated primitives.
//!
//! Every [`crate::Primitive`] carries an explicit `z_index` for render ordering. The engine sets
//! z-indexes consistently so backends don't have to hand-tune paint order.
//!
//! These values are intentionally coarse. Renderers should sort by `(z_index, emission order)`
//! for a deterministic tie-break; the engine emits primitives in a stable order.

/// The background ring track (gauge mode).
pub const TRACK: i32 = -100;

/// Segment arcs.
pub const ARCS: i32 = 0;
/// Gap separator strokes drawn over arc boundaries.
pub const SEPARATORS: i32 = 10;

/// Per-segment ring labels.
pub const SEGMENT_LABELS: i32 = 40;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels and values.
pub const LEGEND_LABELS: i32 = 70;

/// Center text.
pub const CENTER_TEXT: i32 = 80;
/// The caption above the ring.
pub const CAPTION: i32 = 90;
