// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives.
//!
//! The engine's boundary output: a flat list of arcs, line segments, rects, and
//! positioned text strings that any 2D backend (SVG, Canvas, vector scene) can
//! consume directly. Primitives carry an explicit z-index; backends should sort by
//! `(z_index, emission order)`.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::geometry;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchor at the start (left for LTR text).
    Start,
    /// Anchor at the horizontal center.
    #[default]
    Middle,
    /// Anchor at the end (right for LTR text).
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Center the text vertically on the anchor.
    #[default]
    Middle,
    /// Conventional alphabetic baseline.
    Alphabetic,
    /// Hanging baseline (anchor at the top).
    Hanging,
}

/// One drawable primitive with a render-order hint.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    /// Rendering order hint (see [`crate::z_order`]).
    pub z_index: i32,
    /// The shape payload.
    pub kind: PrimitiveKind,
}

/// Shape payloads.
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveKind {
    /// A stroked circular arc.
    Arc {
        /// Circle center.
        center: Point,
        /// Circle radius at the stroke center.
        radius: f64,
        /// Start angle in degrees (0° at "3 o'clock", clockwise positive).
        start_angle: f64,
        /// End angle in degrees (`end_angle >= start_angle`).
        end_angle: f64,
        /// Stroke width.
        stroke_width: f64,
        /// Stroke color.
        color: Color,
    },
    /// A stroked line segment.
    Line {
        /// Start point.
        p0: Point,
        /// End point.
        p1: Point,
        /// Stroke width.
        stroke_width: f64,
        /// Stroke color.
        color: Color,
    },
    /// A filled rectangle (legend swatches).
    Rect {
        /// The rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A positioned text string (unshaped).
    Text {
        /// Anchor position.
        pos: Point,
        /// Text content.
        text: String,
        /// Font size in canvas units.
        font_size: f64,
        /// CSS-style font weight (100 to 900).
        weight: u16,
        /// Fill color.
        color: Color,
        /// Horizontal anchor.
        anchor: TextAnchor,
        /// Vertical baseline.
        baseline: TextBaseline,
    },
}

impl Primitive {
    /// Creates an arc primitive.
    pub fn arc(
        z_index: i32,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        stroke_width: f64,
        color: Color,
    ) -> Self {
        Self {
            z_index,
            kind: PrimitiveKind::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                stroke_width,
                color,
            },
        }
    }

    /// Creates a line primitive.
    pub fn line(z_index: i32, p0: Point, p1: Point, stroke_width: f64, color: Color) -> Self {
        Self {
            z_index,
            kind: PrimitiveKind::Line {
                p0,
                p1,
                stroke_width,
                color,
            },
        }
    }

    /// Creates a rect primitive.
    pub fn rect(z_index: i32, rect: Rect, color: Color) -> Self {
        Self {
            z_index,
            kind: PrimitiveKind::Rect { rect, color },
        }
    }

    /// Creates a text primitive.
    pub fn text(
        z_index: i32,
        pos: Point,
        text: impl Into<String>,
        font_size: f64,
        weight: u16,
        color: Color,
        anchor: TextAnchor,
        baseline: TextBaseline,
    ) -> Self {
        Self {
            z_index,
            kind: PrimitiveKind::Text {
                pos,
                text: text.into(),
                font_size,
                weight,
                color,
                anchor,
                baseline,
            },
        }
    }
}

impl PrimitiveKind {
    /// For arcs: the endpoints and large-arc flag needed by SVG-style `A` commands.
    ///
    /// Returns `None` for non-arc primitives.
    pub fn arc_endpoints(&self) -> Option<(Point, Point, bool)> {
        match self {
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                ..
            } => Some(geometry::arc_endpoints(
                *radius,
                *start_angle,
                *end_angle,
                *center,
            )),
            _ => None,
        }
    }
}
