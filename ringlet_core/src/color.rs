// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color parsing, interpolation, and multi-stop gradient sampling.
//!
//! User/config colors are hex strings; everything downstream of sanitization works on
//! [`Rgb`] values and converts to [`peniko::Color`] only at the primitive boundary.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Division guard for coincident gradient stops.
const STOP_EPSILON: f64 = 1e-6;

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// The fixed fallback for unparseable config colors.
    pub const FALLBACK: Self = Self::new(0xff, 0x00, 0x00);

    /// Creates a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a strict 6-digit hex color (`#rrggbb`, case-insensitive, `#` optional).
    ///
    /// Anything else is invalid.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Sanitizes a config-supplied color string.
    ///
    /// Accepts `#rrggbb` or 3-digit shorthand `#rgb` (each nibble doubled); anything else
    /// yields [`Rgb::FALLBACK`]. This guards unvalidated user input before it reaches the
    /// drawing layer, so the leading `#` is required here.
    pub fn sanitize(s: &str) -> Self {
        let s = s.trim();
        let Some(digits) = s.strip_prefix('#') else {
            return Self::FALLBACK;
        };
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::FALLBACK;
        }
        match digits.len() {
            6 => Self::parse_hex(digits).unwrap_or(Self::FALLBACK),
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok();
                match (nibble(0), nibble(1), nibble(2)) {
                    (Some(r), Some(g), Some(b)) => Self::new(r * 17, g * 17, b * 17),
                    _ => Self::FALLBACK,
                }
            }
            _ => Self::FALLBACK,
        }
    }

    /// Formats as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        let mut out = String::with_capacity(7);
        // Writing to a String cannot fail.
        let _ = write!(out, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
        out
    }

    /// Converts to an opaque [`peniko::Color`].
    pub fn to_color(self) -> peniko::Color {
        peniko::Color::from_rgb8(self.r, self.g, self.b)
    }

    /// Converts to a [`peniko::Color`] with the given alpha in `[0, 1]`.
    pub fn to_color_with_alpha(self, alpha: f32) -> peniko::Color {
        self.to_color().with_alpha(alpha)
    }
}

/// A categorical fallback palette for segments without an explicit color.
///
/// Colors repeat if the segment count exceeds the palette length.
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(0x64, 0x95, 0xed), // cornflower blue
    Rgb::new(0xff, 0xa5, 0x00), // orange
    Rgb::new(0x3c, 0xb3, 0x71), // medium sea green
    Rgb::new(0xdc, 0x14, 0x3c), // crimson
    Rgb::new(0xda, 0xa5, 0x20), // goldenrod
    Rgb::new(0x6a, 0x5a, 0xcd), // slate blue
    Rgb::new(0x00, 0x8b, 0x8b), // dark cyan
    Rgb::new(0xff, 0x69, 0xb4), // hot pink
];

/// Standard linear interpolation. `t` is not clamped here; that is the caller's job.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Component-wise RGB interpolation; each channel is rounded and clamped to `0..=255`.
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let channel = |a: u8, b: u8| {
        let v = lerp(f64::from(a), f64::from(b), t).round();
        v.clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        channel(a.r, b.r),
        channel(a.g, b.g),
        channel(a.b, b.b),
    )
}

/// A gradient anchor: a color at a position in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient, in `[0, 1]`.
    pub position: f64,
    /// Anchor color.
    pub color: Rgb,
}

/// A multi-stop color gradient, sampled by fraction.
///
/// Construction sanitizes and sorts; [`Gradient::sample`] assumes stops are already
/// ordered by position.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: SmallVec<[ColorStop; 5]>,
}

impl Gradient {
    /// Builds a gradient from `(position, color-string)` pairs.
    ///
    /// Each color is sanitized, each position clamped to `[0, 1]`, and the stops are
    /// stable-sorted by position ascending, so on duplicate positions the pair provided
    /// first wins as the earlier stop. The first position is conventionally 0; this is
    /// clamped, not enforced.
    pub fn from_stops<'a>(stops: impl IntoIterator<Item = (f64, &'a str)>) -> Self {
        let mut stops: SmallVec<[ColorStop; 5]> = stops
            .into_iter()
            .map(|(position, color)| ColorStop {
                position: position.clamp(0.0, 1.0),
                color: Rgb::sanitize(color),
            })
            .collect();
        // slice::sort_by is stable.
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { stops }
    }

    /// The ordered stops.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Samples the gradient at fraction `t`.
    ///
    /// `t` is clamped to `[0, 1]`; the bracketing stop pair is interpolated with an
    /// epsilon guard against coincident positions. A `t` beyond all stops yields the
    /// last stop's color; an empty gradient yields the fallback color.
    pub fn sample(&self, t: f64) -> Rgb {
        let Some(last) = self.stops.last() else {
            return Rgb::FALLBACK;
        };
        let t = t.clamp(0.0, 1.0);
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.position && t <= b.position {
                let f = (t - a.position) / (b.position - a.position).max(STOP_EPSILON);
                return lerp_rgb(a.color, b.color, f);
            }
        }
        last.color
    }
}
