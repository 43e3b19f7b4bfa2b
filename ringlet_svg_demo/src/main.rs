// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut chart demos for `ringlet_core`, dumped as SVG files.

mod svg;

use ringlet_core::{
    CenterMode, CenterSecondary, ColorMode, DonutChart, EntityState, Gradient, LegendValueMode,
    RenderConfig, SegmentLabelMode, SegmentSpec, StateSnapshot, UNIT_ATTRIBUTE,
};

const BACKGROUND: &str = "#1c1c1c";

fn main() {
    let demos = [
        ("ringlet_pie.svg", pie_demo()),
        ("ringlet_gauge.svg", gauge_demo()),
        ("ringlet_no_data.svg", no_data_demo()),
    ];
    for (file, svg) in demos {
        std::fs::write(file, svg).expect("write demo svg");
        println!("wrote {file}");
    }
}

fn power_snapshot() -> StateSnapshot {
    let mut snapshot = StateSnapshot::new();
    snapshot.insert(
        "sensor.solar_power",
        EntityState::new("412").with_attribute(UNIT_ATTRIBUTE, "W"),
    );
    snapshot.insert(
        "sensor.grid_power",
        EntityState::new("1.204,5").with_attribute(UNIT_ATTRIBUTE, "W"),
    );
    snapshot.insert(
        "sensor.battery_power",
        EntityState::new("168").with_attribute(UNIT_ATTRIBUTE, "W"),
    );
    snapshot.insert(
        "sensor.solar_energy_today",
        EntityState::new("6.82").with_attribute(UNIT_ATTRIBUTE, "kWh"),
    );
    snapshot
}

fn pie_demo() -> String {
    let chart = DonutChart::new(RenderConfig {
        segments: vec![
            SegmentSpec::new("sensor.solar_power")
                .with_label("Solar")
                .with_color("#facc15"),
            SegmentSpec::new("sensor.grid_power")
                .with_label("Grid")
                .with_color("#60a5fa"),
            SegmentSpec::new("sensor.battery_power")
                .with_label("Battery")
                .with_color("#34d399"),
        ],
        gap_width_px: 4.0,
        top_label_text: String::from("Power"),
        center_unit: String::from("W"),
        segment_label_mode: SegmentLabelMode::Percent,
        show_legend: true,
        legend_value_mode: LegendValueMode::Both,
        ..RenderConfig::default()
    });
    svg::render_svg(&chart.render(&power_snapshot()), BACKGROUND)
}

fn gauge_demo() -> String {
    let chart = DonutChart::new(RenderConfig {
        segments: vec![SegmentSpec::new("sensor.solar_power")],
        color_mode: ColorMode::Gradient {
            gradient: Gradient::from_stops([
                (0.0, "#ff0000"),
                (0.30, "#fb923c"),
                (0.50, "#facc15"),
                (0.75, "#34d399"),
                (1.0, "#00bcd4"),
            ]),
            min_value: 0.0,
            max_value: 600.0,
        },
        top_label_text: String::from("Solar"),
        center_secondary: Some(CenterSecondary::new("sensor.solar_energy_today").with_decimals(2)),
        ..RenderConfig::default()
    });
    svg::render_svg(&chart.render(&power_snapshot()), BACKGROUND)
}

fn no_data_demo() -> String {
    let chart = DonutChart::new(RenderConfig {
        segments: vec![SegmentSpec::new("sensor.unplugged")],
        center_mode: CenterMode::None,
        ..RenderConfig::default()
    });
    svg::render_svg(&chart.render(&StateSnapshot::new()), BACKGROUND)
}
