// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment resolution.
//!
//! Joins configured segment descriptors against a state snapshot, producing valued
//! segments in config order plus the total. Angles are annotated later by
//! [`crate::layout`]; resolution itself knows nothing about geometry.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::coerce::coerce_non_negative;
use crate::color::{PALETTE, Rgb};
use crate::config::SegmentSpec;
use crate::snapshot::StateSnapshot;

/// A configured segment joined with snapshot data. Ephemeral: recomputed every render.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSegment {
    /// Entity identifier this segment reads from.
    pub source: String,
    /// Display label (the raw source identifier when none was configured).
    pub label: String,
    /// Paint color.
    pub color: Rgb,
    /// Non-negative resolved value.
    pub value: f64,
    /// Unit from the source's attribute bag (empty when absent).
    pub unit: String,
    /// Whether the source was present in the snapshot.
    ///
    /// Missing sources are retained with value 0 rather than dropped, so legend and
    /// draw slots stay positionally stable; backends can style them as unavailable.
    pub available: bool,
    /// Arc start angle in degrees, set by [`crate::layout`].
    pub start_angle: f64,
    /// Arc end angle in degrees (`end_angle >= start_angle`), set by [`crate::layout`].
    pub end_angle: f64,
}

impl ResolvedSegment {
    /// The visible angular span in degrees.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether this segment contributes a drawable arc.
    pub fn is_drawable(&self) -> bool {
        self.span() > 0.0
    }
}

/// Output of [`resolve`]: segments in config order plus the effective total.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    /// Valued segments, angles not yet assigned.
    pub segments: Vec<ResolvedSegment>,
    /// Sum of values, forced to 0 when below the configured minimum.
    pub total: f64,
}

impl Resolved {
    /// Whether every segment's source was missing from the snapshot.
    pub fn all_unavailable(&self) -> bool {
        !self.segments.is_empty() && self.segments.iter().all(|s| !s.available)
    }
}

/// Resolves segment specs against a snapshot.
///
/// Values come from numeric coercion with fallback 0, negatives clamped to 0. The
/// total is all-or-nothing gated: below `min_total` the effective total used by every
/// downstream stage (angles, percentages, center text) is 0.
pub fn resolve(specs: &[SegmentSpec], snapshot: &StateSnapshot, min_total: f64) -> Resolved {
    let mut segments = Vec::with_capacity(specs.len());
    let mut total = 0.0;

    for (i, spec) in specs.iter().enumerate() {
        let entity = snapshot.get(&spec.source);
        let value = coerce_non_negative(entity.map(|e| e.state.as_str()), 0.0);
        total += value;

        let color = spec
            .color
            .as_deref()
            .map(Rgb::sanitize)
            .unwrap_or(PALETTE[i % PALETTE.len()]);
        let label = spec
            .label
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| spec.source.clone());
        let unit = entity
            .and_then(|e| e.unit())
            .map(String::from)
            .unwrap_or_default();

        segments.push(ResolvedSegment {
            source: spec.source.clone(),
            label,
            color,
            value,
            unit,
            available: entity.is_some(),
            start_angle: 0.0,
            end_angle: 0.0,
        });
    }

    if total < min_total {
        total = 0.0;
    }
    Resolved { segments, total }
}
