// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::{
    CenterMode, CenterSecondary, ColorMode, DonutChart, EntityState, Gradient, LegendValueMode,
    Primitive, PrimitiveKind, RenderConfig, RenderStatus, SegmentLabelMode, SegmentSpec,
    StateSnapshot, UNIT_ATTRIBUTE, z_order,
};

fn power_snapshot() -> StateSnapshot {
    let mut s = StateSnapshot::new();
    s.insert(
        "sensor.solar",
        EntityState::new("10").with_attribute(UNIT_ATTRIBUTE, "W"),
    );
    s.insert(
        "sensor.grid",
        EntityState::new("20").with_attribute(UNIT_ATTRIBUTE, "W"),
    );
    s.insert(
        "sensor.battery",
        EntityState::new("30").with_attribute(UNIT_ATTRIBUTE, "W"),
    );
    s
}

fn three_segments() -> Vec<SegmentSpec> {
    vec![
        SegmentSpec::new("sensor.solar").with_label("Solar"),
        SegmentSpec::new("sensor.grid").with_label("Grid"),
        SegmentSpec::new("sensor.battery").with_label("Battery"),
    ]
}

fn arcs_at(output: &[Primitive], z: i32) -> Vec<(f64, f64)> {
    output
        .iter()
        .filter(|p| p.z_index == z)
        .filter_map(|p| match &p.kind {
            PrimitiveKind::Arc {
                start_angle,
                end_angle,
                ..
            } => Some((*start_angle, *end_angle)),
            _ => None,
        })
        .collect()
}

fn text_details(output: &[Primitive], z: i32) -> Vec<(String, f64, u16)> {
    output
        .iter()
        .filter(|p| p.z_index == z)
        .filter_map(|p| match &p.kind {
            PrimitiveKind::Text {
                text, pos, weight, ..
            } => Some((text.clone(), pos.y, *weight)),
            _ => None,
        })
        .collect()
}

fn texts(output: &[Primitive], z: i32) -> Vec<String> {
    output
        .iter()
        .filter(|p| p.z_index == z)
        .filter_map(|p| match &p.kind {
            PrimitiveKind::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn pie_spans_are_proportional_from_twelve_o_clock() {
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        center_mode: CenterMode::None,
        segment_label_mode: SegmentLabelMode::None,
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());

    assert_eq!(out.status, RenderStatus::Ok);
    let arcs = arcs_at(&out.primitives, z_order::ARCS);
    let expected = [(-90.0, -30.0), (-30.0, 90.0), (90.0, 270.0)];
    assert_eq!(arcs.len(), expected.len());
    for ((a0, a1), (e0, e1)) in arcs.iter().zip(expected) {
        assert!((a0 - e0).abs() < 1e-9);
        assert!((a1 - e1).abs() < 1e-9);
    }
}

#[test]
fn render_is_idempotent_bit_for_bit() {
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        gap_width_px: 6.0,
        show_legend: true,
        ..RenderConfig::default()
    });
    let snapshot = power_snapshot();

    let a = chart.render(&snapshot);
    let b = chart.render(&snapshot);
    assert_eq!(a, b);
    for (pa, pb) in a.primitives.iter().zip(&b.primitives) {
        if let (
            PrimitiveKind::Arc {
                start_angle: sa,
                end_angle: ea,
                ..
            },
            PrimitiveKind::Arc {
                start_angle: sb,
                end_angle: eb,
                ..
            },
        ) = (&pa.kind, &pb.kind)
        {
            assert_eq!(sa.to_bits(), sb.to_bits());
            assert_eq!(ea.to_bits(), eb.to_bits());
        }
    }
}

#[test]
fn gaps_tile_the_full_circle() {
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        gap_width_px: 6.0,
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());

    let arcs = arcs_at(&out.primitives, z_order::ARCS);
    assert_eq!(arcs.len(), 3);
    let drawn: f64 = arcs.iter().map(|(a0, a1)| a1 - a0).sum();
    let gap_degrees =
        crate::gap_degrees_for_px(6.0, chart.config().ring_radius) * arcs.len() as f64;
    assert!((drawn + gap_degrees - 360.0).abs() < 1e-9);

    // One separator stroke per slot boundary.
    let separators = out
        .primitives
        .iter()
        .filter(|p| p.z_index == z_order::SEPARATORS)
        .count();
    assert_eq!(separators, 3);
}

#[test]
fn min_total_gate_hides_everything_but_center_zero() {
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        min_total: 100.0, // actual total is 60
        center_unit: String::from("W"),
        show_legend: true,
        segment_label_mode: SegmentLabelMode::Value,
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());

    assert_eq!(out.status, RenderStatus::Ok);
    assert!(arcs_at(&out.primitives, z_order::ARCS).is_empty());
    assert!(out.legend.is_empty());
    assert!(texts(&out.primitives, z_order::SEGMENT_LABELS).is_empty());
    assert_eq!(texts(&out.primitives, z_order::CENTER_TEXT), vec!["0 W"]);
}

#[test]
fn label_threshold_is_strict() {
    // 10/20/30 of 60: spans 60°, 120°, 180°.
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        segment_label_mode: SegmentLabelMode::Percent,
        segment_label_min_angle: 60.0,
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());

    // The 60° segment sits exactly at the threshold and is excluded.
    let labels = texts(&out.primitives, z_order::SEGMENT_LABELS);
    assert_eq!(labels, vec!["33%", "50%"]);
}

#[test]
fn legend_mirrors_config_order() {
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        show_legend: true,
        legend_value_mode: LegendValueMode::Both,
        legend_value_decimals: 1,
        legend_percent_decimals: 0,
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());

    let labels: Vec<&str> = out.legend.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Solar", "Grid", "Battery"]);
    assert_eq!(out.legend[0].value_text, "10.0 W (17%)");
    // Three primitives per row: swatch, label, value.
    let swatches = out
        .primitives
        .iter()
        .filter(|p| p.z_index == z_order::LEGEND_SWATCHES)
        .count();
    assert_eq!(swatches, 3);
    let legend_texts = texts(&out.primitives, z_order::LEGEND_LABELS);
    assert_eq!(legend_texts.len(), 6);
}

#[test]
fn missing_source_keeps_its_legend_slot() {
    let mut specs = three_segments();
    specs.insert(1, SegmentSpec::new("sensor.gone").with_label("Gone"));
    let chart = DonutChart::new(RenderConfig {
        segments: specs,
        show_legend: true,
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());

    assert_eq!(out.legend.len(), 4);
    assert_eq!(out.legend[1].label, "Gone");
    assert!(!out.legend[1].available);
    assert_eq!(out.legend[1].value_text, "0");
    // But only three drawable arcs.
    assert_eq!(arcs_at(&out.primitives, z_order::ARCS).len(), 3);
}

#[test]
fn empty_segment_list_is_no_data() {
    let chart = DonutChart::new(RenderConfig::default());
    let out = chart.render(&power_snapshot());
    assert_eq!(out.status, RenderStatus::NoData);
    assert!(arcs_at(&out.primitives, z_order::ARCS).is_empty());
    assert_eq!(out.primitives.len(), 1);
}

#[test]
fn entirely_unavailable_sources_are_no_data() {
    let chart = DonutChart::new(RenderConfig {
        segments: vec![SegmentSpec::new("a"), SegmentSpec::new("b")],
        ..RenderConfig::default()
    });
    let out = chart.render(&StateSnapshot::new());
    assert_eq!(out.status, RenderStatus::NoData);
}

#[test]
fn center_entity_mode_uses_attribute_unit_fallback() {
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        center_mode: CenterMode::Entity(String::from("sensor.battery")),
        center_decimals: 1,
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());
    assert_eq!(texts(&out.primitives, z_order::CENTER_TEXT), vec!["30.0 W"]);

    // An explicit center unit wins over the attribute unit.
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        center_mode: CenterMode::Entity(String::from("sensor.battery")),
        center_unit: String::from("watts"),
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());
    assert_eq!(
        texts(&out.primitives, z_order::CENTER_TEXT),
        vec!["30 watts"]
    );
}

#[test]
fn secondary_center_line_renders_below_and_lighter() {
    let mut snapshot = power_snapshot();
    snapshot.insert(
        "sensor.energy_today",
        EntityState::new("3.5").with_attribute(UNIT_ATTRIBUTE, "kWh"),
    );
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        center_unit: String::from("W"),
        center_secondary: Some(CenterSecondary::new("sensor.energy_today").with_decimals(2)),
        ..RenderConfig::default()
    });
    let out = chart.render(&snapshot);

    let lines = text_details(&out.primitives, z_order::CENTER_TEXT);
    assert_eq!(lines.len(), 2);
    let (primary_text, primary_y, primary_weight) = &lines[0];
    let (secondary_text, secondary_y, secondary_weight) = &lines[1];
    assert_eq!(primary_text, "60 W");
    assert_eq!(secondary_text, "3.50 kWh");
    assert!(secondary_y > primary_y);
    assert_eq!(*primary_weight, 400);
    assert_eq!(*secondary_weight, 300);

    // Placement mirrors the ring radius fractions around true center.
    let cy = out.view_box.height() * 0.5;
    let r = chart.config().ring_radius;
    assert!((primary_y - (cy - r * 0.05)).abs() < 1e-9);
    assert!((secondary_y - (cy + r * 0.35)).abs() < 1e-9);
}

#[test]
fn missing_secondary_source_drops_only_that_line() {
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        center_unit: String::from("W"),
        center_secondary: Some(CenterSecondary::new("sensor.gone")),
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());
    assert_eq!(out.status, RenderStatus::Ok);
    assert_eq!(texts(&out.primitives, z_order::CENTER_TEXT), vec!["60 W"]);
}

#[test]
fn center_none_suppresses_the_secondary_line_too() {
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        center_mode: CenterMode::None,
        center_secondary: Some(CenterSecondary::new("sensor.grid")),
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());
    assert!(texts(&out.primitives, z_order::CENTER_TEXT).is_empty());
}

#[test]
fn gauge_renders_the_secondary_line() {
    let gradient = Gradient::from_stops([(0.0, "#ff0000"), (1.0, "#00bcd4")]);
    let chart = DonutChart::new(RenderConfig {
        segments: vec![SegmentSpec::new("sensor.solar")],
        color_mode: ColorMode::Gradient {
            gradient,
            min_value: 0.0,
            max_value: 20.0,
        },
        center_secondary: Some(CenterSecondary::new("sensor.grid").with_unit("watts")),
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());
    assert_eq!(
        texts(&out.primitives, z_order::CENTER_TEXT),
        vec!["10 W", "20 watts"]
    );
}

#[test]
fn caption_weight_is_configurable() {
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        top_label_text: String::from("Power"),
        top_label_weight: 600,
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());
    let captions = text_details(&out.primitives, z_order::CAPTION);
    assert_eq!(captions.len(), 1);
    assert_eq!(captions[0].2, 600);
}

#[test]
fn caption_is_emitted_above_the_ring() {
    let chart = DonutChart::new(RenderConfig {
        segments: three_segments(),
        top_label_text: String::from("Power"),
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());

    let caption: Vec<&Primitive> = out
        .primitives
        .iter()
        .filter(|p| p.z_index == z_order::CAPTION)
        .collect();
    assert_eq!(caption.len(), 1);
    let PrimitiveKind::Text { pos, .. } = &caption[0].kind else {
        panic!("caption should be text");
    };
    let ring_top = out.view_box.height() * 0.5 - chart.config().ring_radius;
    assert!(pos.y < ring_top);
}

#[test]
fn gauge_mode_draws_track_and_gradient_slices() {
    let gradient = Gradient::from_stops([(0.0, "#ff0000"), (1.0, "#00bcd4")]);
    let chart = DonutChart::new(RenderConfig {
        segments: vec![SegmentSpec::new("sensor.solar")],
        color_mode: ColorMode::Gradient {
            gradient,
            min_value: 0.0,
            max_value: 20.0,
        },
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());

    assert_eq!(out.status, RenderStatus::Ok);
    let track = arcs_at(&out.primitives, z_order::TRACK);
    assert_eq!(track, vec![(-90.0, 270.0)]);

    // 10 of [0, 20] fills half the ring with 140 mini-arcs.
    let slices = arcs_at(&out.primitives, z_order::ARCS);
    assert_eq!(slices.len(), 140);
    let (first_start, _) = slices[0];
    let (_, last_end) = slices[slices.len() - 1];
    assert!((first_start - -90.0).abs() < 1e-9);
    assert!((last_end - 90.0).abs() < 1e-9);
    assert!(out.legend.is_empty());
}

#[test]
fn gauge_fraction_clamps_outside_bounds() {
    let gradient = Gradient::from_stops([(0.0, "#ff0000"), (1.0, "#00bcd4")]);
    let config = RenderConfig {
        segments: vec![SegmentSpec::new("sensor.battery")],
        color_mode: ColorMode::Gradient {
            gradient,
            min_value: 0.0,
            max_value: 10.0, // battery reads 30
        },
        ..RenderConfig::default()
    };
    let out = DonutChart::new(config).render(&power_snapshot());

    let slices = arcs_at(&out.primitives, z_order::ARCS);
    let (_, last_end) = slices[slices.len() - 1];
    assert!((last_end - 270.0).abs() < 1e-9);
}

#[test]
fn gauge_missing_entity_is_no_data() {
    let gradient = Gradient::from_stops([(0.0, "#ff0000"), (1.0, "#00bcd4")]);
    let chart = DonutChart::new(RenderConfig {
        segments: vec![SegmentSpec::new("sensor.gone")],
        color_mode: ColorMode::Gradient {
            gradient,
            min_value: 0.0,
            max_value: 100.0,
        },
        ..RenderConfig::default()
    });
    let out = chart.render(&power_snapshot());
    assert_eq!(out.status, RenderStatus::NoData);
}

#[test]
fn legend_extends_the_view_box() {
    let without = DonutChart::new(RenderConfig {
        segments: three_segments(),
        ..RenderConfig::default()
    });
    let with = DonutChart::new(RenderConfig {
        segments: three_segments(),
        show_legend: true,
        ..RenderConfig::default()
    });
    let snapshot = power_snapshot();
    let a = without.render(&snapshot);
    let b = with.render(&snapshot);
    assert!(b.view_box.height() > a.view_box.height());
    assert_eq!(a.view_box.width(), b.view_box.width());
}
