// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular layout.
//!
//! Distributes resolved segments around the circle as contiguous arcs, walking a
//! cursor in config order. The coordinate convention matches SVG: 0° at
//! "3 o'clock", angles increasing clockwise, with the ring starting at
//! "12 o'clock" ([`ROTATION_START`]).

extern crate alloc;

use alloc::vec::Vec;

use crate::segment::ResolvedSegment;

/// Where the first segment starts: "12 o'clock".
pub const ROTATION_START: f64 = -90.0;

/// Converts a desired pixel gap into degrees through the ring circumference.
///
/// `mean_radius` is the stroke-center radius (the average of the inner and outer ring
/// edge), so the visual gap thickness stays constant regardless of ring size.
pub fn gap_degrees_for_px(gap_px: f64, mean_radius: f64) -> f64 {
    let circumference = 2.0 * core::f64::consts::PI * mean_radius.max(1.0);
    (gap_px.max(0.0) / circumference) * 360.0
}

/// Annotates segments with start/end angles and returns the slot boundary angles.
///
/// Each segment's *slot* is `fraction(value/total) * 360°`; with a non-zero gap the
/// drawn arc is `slot - gap` centered inside the slot, but the cursor always advances
/// by the full slot so boundaries stay exact and never drift. Segments whose drawn
/// span would be non-positive become zero-length arcs at the cursor (skipped cleanly
/// by label logic).
///
/// With `total <= 0` every segment degenerates to a zero-length arc at
/// [`ROTATION_START`] and no boundaries are returned.
///
/// The returned boundaries are the slot start angles of segments with a positive
/// slot, for separator strokes; they are only meaningful when at least two arcs are
/// drawn.
pub fn layout(segments: &mut [ResolvedSegment], total: f64, gap_degrees: f64) -> Vec<f64> {
    let mut boundaries = Vec::new();

    if total <= 0.0 {
        for segment in segments.iter_mut() {
            segment.start_angle = ROTATION_START;
            segment.end_angle = ROTATION_START;
        }
        return boundaries;
    }

    let gap = gap_degrees.max(0.0);
    let mut cursor = ROTATION_START;
    for segment in segments.iter_mut() {
        let fraction = (segment.value / total).clamp(0.0, 1.0);
        let slot = fraction * 360.0;
        let drawn = slot - gap;

        if slot > 0.0 {
            boundaries.push(cursor);
        }
        if drawn > 0.0 {
            segment.start_angle = cursor + gap * 0.5;
            segment.end_angle = segment.start_angle + drawn;
        } else {
            segment.start_angle = cursor;
            segment.end_angle = cursor;
        }
        debug_assert!(
            segment.end_angle >= segment.start_angle,
            "layout produced a negative span"
        );

        cursor += slot;
    }
    boundaries
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use alloc::vec::Vec;

    use super::*;

    fn segments(values: &[f64]) -> Vec<ResolvedSegment> {
        values
            .iter()
            .map(|&value| ResolvedSegment {
                source: String::new(),
                label: String::new(),
                color: crate::color::Rgb::FALLBACK,
                value,
                unit: String::new(),
                available: true,
                start_angle: 0.0,
                end_angle: 0.0,
            })
            .collect()
    }

    #[test]
    fn spans_are_proportional_and_contiguous() {
        let mut segs = segments(&[10.0, 20.0, 30.0]);
        layout(&mut segs, 60.0, 0.0);

        let expected = [(-90.0, -30.0), (-30.0, 90.0), (90.0, 270.0)];
        for (seg, (start, end)) in segs.iter().zip(expected) {
            assert!((seg.start_angle - start).abs() < 1e-9);
            assert!((seg.end_angle - end).abs() < 1e-9);
        }
    }

    #[test]
    fn full_circle_tiles_exactly_with_gaps() {
        let mut segs = segments(&[5.0, 1.0, 3.0, 7.0]);
        let gap = 4.0;
        let boundaries = layout(&mut segs, 16.0, gap);

        let drawn: f64 = segs.iter().map(ResolvedSegment::span).sum();
        let gaps = gap * segs.len() as f64;
        assert!((drawn + gaps - 360.0).abs() < 1e-9);
        assert_eq!(boundaries.len(), 4);
        assert_eq!(boundaries[0], ROTATION_START);
    }

    #[test]
    fn gap_is_centered_in_the_slot() {
        let mut segs = segments(&[1.0, 1.0]);
        layout(&mut segs, 2.0, 10.0);

        assert_eq!(segs[0].start_angle, -85.0);
        assert_eq!(segs[0].end_angle, 85.0);
        assert_eq!(segs[1].start_angle, 95.0);
        assert_eq!(segs[1].end_angle, 265.0);
    }

    #[test]
    fn zero_total_degenerates_everything() {
        let mut segs = segments(&[0.0, 0.0]);
        let boundaries = layout(&mut segs, 0.0, 0.0);
        assert!(boundaries.is_empty());
        for s in &segs {
            assert_eq!(s.start_angle, ROTATION_START);
            assert_eq!(s.end_angle, ROTATION_START);
            assert!(!s.is_drawable());
        }
    }

    #[test]
    fn slot_smaller_than_gap_collapses_but_does_not_drift() {
        // Middle slot is 3.6°, smaller than the 10° gap.
        let mut segs = segments(&[49.0, 1.0, 50.0]);
        layout(&mut segs, 100.0, 10.0);

        assert!(!segs[1].is_drawable());
        assert_eq!(segs[1].start_angle, segs[1].end_angle);
        // The last slot still ends exactly at the top of the circle.
        let last_slot_end = segs[2].end_angle + 5.0;
        assert!((last_slot_end - 270.0).abs() < 1e-9);
    }

    #[test]
    fn zero_value_segments_are_recorded_at_the_cursor() {
        let mut segs = segments(&[30.0, 0.0, 30.0]);
        let boundaries = layout(&mut segs, 60.0, 0.0);
        assert_eq!(segs[1].start_angle, 90.0);
        assert_eq!(segs[1].end_angle, 90.0);
        // Zero slots contribute no separator boundary.
        assert_eq!(boundaries.len(), 2);
    }

    #[test]
    fn pixel_gap_converts_through_circumference() {
        let deg = gap_degrees_for_px(10.0, 65.0);
        let circumference = 2.0 * core::f64::consts::PI * 65.0;
        assert!((deg - 10.0 / circumference * 360.0).abs() < 1e-12);
        // Bigger ring, smaller angle for the same pixel gap.
        assert!(gap_degrees_for_px(10.0, 130.0) < deg);
        assert_eq!(gap_degrees_for_px(-5.0, 65.0), 0.0);
    }

    #[test]
    fn layout_is_deterministic() {
        let mut a = segments(&[3.0, 1.0, 4.0]);
        let mut b = segments(&[3.0, 1.0, 4.0]);
        layout(&mut a, 8.0, 2.0);
        layout(&mut b, 8.0, 2.0);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.start_angle.to_bits(), y.start_angle.to_bits());
            assert_eq!(x.end_angle.to_bits(), y.end_angle.to_bits());
        }
    }
}
