// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric coercion for raw state strings.
//!
//! Snapshot states arrive as free-form strings ("42.5", "1.234,56", "unavailable").
//! Coercion normalizes locale decimal/thousands separators before parsing, and
//! substitutes a caller-provided fallback for anything non-finite.

extern crate alloc;

use alloc::string::String;

/// Coerces a raw state string into a finite `f64`.
///
/// Separator disambiguation:
/// - exactly one comma and no periods: the comma is a decimal separator (`"1,5"` is `1.5`);
/// - two or more separators: the one occurring *last* is the decimal separator, all earlier
///   commas and periods are thousands separators (`"1.234,56"` and `"1,234.56"` are both
///   `1234.56`).
///
/// `None` or a non-finite parse yields `fallback`.
pub fn coerce(raw: Option<&str>, fallback: f64) -> f64 {
    let Some(raw) = raw else {
        return fallback;
    };
    let normalized = normalize_separators(raw.trim());
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => fallback,
    }
}

/// Coerces like [`coerce`], then clamps negatives to zero.
///
/// Used wherever the value is a physical quantity contributing to a total; negative
/// contributions are not meaningful there.
pub fn coerce_non_negative(raw: Option<&str>, fallback: f64) -> f64 {
    coerce(raw, fallback).max(0.0)
}

fn normalize_separators(s: &str) -> String {
    let commas = s.matches(',').count();
    let periods = s.matches('.').count();

    if commas == 1 && periods == 0 {
        return s.replace(',', ".");
    }
    if commas + periods <= 1 {
        return String::from(s);
    }

    // Multiple separators: the last one wins as the decimal point.
    let decimal_at = s
        .char_indices()
        .filter(|&(_, c)| c == ',' || c == '.')
        .map(|(i, _)| i)
        .next_back();
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        match c {
            ',' | '.' if Some(i) == decimal_at => out.push('.'),
            ',' | '.' => {}
            _ => out.push(c),
        }
    }
    out
}
