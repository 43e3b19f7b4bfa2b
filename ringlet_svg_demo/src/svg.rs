// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `ringlet_svg_demo`.

use peniko::Color;
use ringlet_core::{PrimitiveKind, RenderOutput, TextAnchor, TextBaseline};

/// Renders one engine output to a standalone SVG document.
pub(crate) fn render_svg(output: &RenderOutput, background: &str) -> String {
    let vb = output.view_box;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        vb.x0,
        vb.y0,
        vb.width(),
        vb.height(),
        vb.width(),
        vb.height()
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{background}"/>"#,
        vb.x0,
        vb.y0,
        vb.width(),
        vb.height()
    ));
    out.push('\n');

    // Stable sort keeps the engine's emission order as the z tie-break.
    let mut primitives: Vec<_> = output.primitives.iter().collect();
    primitives.sort_by_key(|p| p.z_index);

    for prim in primitives {
        match &prim.kind {
            PrimitiveKind::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                stroke_width,
                color,
            } => {
                let (paint, opacity) = svg_paint(*color);
                if end_angle - start_angle >= 360.0 {
                    // A full circle has coincident arc endpoints; emit a circle element.
                    out.push_str(&format!(
                        r#"<circle cx="{}" cy="{}" r="{radius}" fill="none" stroke="{paint}"{opacity} stroke-width="{stroke_width}"/>"#,
                        center.x, center.y
                    ));
                } else if let Some((p0, p1, large)) = prim.kind.arc_endpoints() {
                    out.push_str(&format!(
                        r#"<path d="M {} {} A {radius} {radius} 0 {} 1 {} {}" fill="none" stroke="{paint}"{opacity} stroke-width="{stroke_width}" stroke-linecap="round"/>"#,
                        p0.x,
                        p0.y,
                        i32::from(large),
                        p1.x,
                        p1.y
                    ));
                }
                out.push('\n');
            }
            PrimitiveKind::Line {
                p0,
                p1,
                stroke_width,
                color,
            } => {
                let (paint, opacity) = svg_paint(*color);
                out.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{paint}"{opacity} stroke-width="{stroke_width}"/>"#,
                    p0.x, p0.y, p1.x, p1.y
                ));
                out.push('\n');
            }
            PrimitiveKind::Rect { rect, color } => {
                let (paint, opacity) = svg_paint(*color);
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{paint}"{opacity}/>"#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height()
                ));
                out.push('\n');
            }
            PrimitiveKind::Text {
                pos,
                text,
                font_size,
                weight,
                color,
                anchor,
                baseline,
            } => {
                let (paint, opacity) = svg_paint(*color);
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let baseline = match baseline {
                    TextBaseline::Middle => "middle",
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Hanging => "hanging",
                };
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{font_size}" font-weight="{weight}" text-anchor="{anchor}" dominant-baseline="{baseline}" fill="{paint}"{opacity}>{}</text>"#,
                    pos.x,
                    pos.y,
                    escape_xml(text)
                ));
                out.push('\n');
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(color: Color) -> (String, String) {
    let rgba = color.to_rgba8();
    let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        String::new()
    } else {
        format!(r#" stroke-opacity="{0}" fill-opacity="{0}""#, f64::from(rgba.a) / 255.0)
    };
    (paint, opacity)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
