// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc trigonometry and canvas extents.
//!
//! Pure shape computation shared by every backend: circle parametrization for arc
//! endpoints, radial separator segments, and the drawing-surface extent rules.

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Fixed horizontal extent of the drawing surface.
pub const CANVAS_WIDTH: f64 = 260.0;

/// Vertical canvas bounds; the height scales with the ring extent between these.
const CANVAS_HEIGHT_MIN: f64 = 200.0;
const CANVAS_HEIGHT_MAX: f64 = 420.0;

/// Radial overshoot of separator strokes past the ring edges, in pixels.
const SEPARATOR_OVERSHOOT: f64 = 1.0;

/// The point on a circle at `angle_deg` (0° at "3 o'clock", clockwise positive).
pub fn point_on_circle(center: Point, radius: f64, angle_deg: f64) -> Point {
    let theta = angle_deg.to_radians();
    Point::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}

/// Computes arc endpoints and the large-arc flag for an SVG-style arc primitive.
///
/// `large` is true when the drawn span strictly exceeds 180°, matching the arc
/// command's sweep convention downstream.
pub fn arc_endpoints(
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    center: Point,
) -> (Point, Point, bool) {
    let p0 = point_on_circle(center, radius, start_deg);
    let p1 = point_on_circle(center, radius, end_deg);
    (p0, p1, end_deg - start_deg > 180.0)
}

/// A radial separator stroke at a boundary angle.
///
/// Spans from just inside the inner ring edge to just outside the outer edge, so the
/// stroke visually cuts the ring.
pub fn separator(center: Point, inner_radius: f64, outer_radius: f64, angle_deg: f64) -> (Point, Point) {
    let p0 = point_on_circle(center, (inner_radius - SEPARATOR_OVERSHOOT).max(0.0), angle_deg);
    let p1 = point_on_circle(center, outer_radius + SEPARATOR_OVERSHOOT, angle_deg);
    (p0, p1)
}

/// The canvas height for a given ring geometry.
///
/// Scales with the ring's vertical extent within clamped bounds, to avoid clipping a
/// large ring or wasting space around a small one. The horizontal extent is fixed at
/// [`CANVAS_WIDTH`].
pub fn canvas_height(ring_radius: f64, ring_width: f64) -> f64 {
    (2.0 * (ring_radius + ring_width) + 100.0).clamp(CANVAS_HEIGHT_MIN, CANVAS_HEIGHT_MAX)
}
