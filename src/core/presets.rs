//! Ready-made themes used by the gallery tool and handy for hosts that want a
//! theme picker out of the box.

use serde_json::{Value, json};

use super::chart_kind::ChartKind;
use super::theme::Theme;
use super::value::record_from_json_value;

pub const AURORA_THEME_NAME: &str = "aurora";
pub const SUNSET_THEME_NAME: &str = "sunset";
pub const TWILIGHT_THEME_NAME: &str = "twilight";

/// Global options shared by the presets; only the colors differ.
fn preset_global_options(
    legend_color: &str,
    tooltip: [&str; 3],
    tick_color: &str,
    grid_color: &str,
) -> Value {
    let [background, title, body] = tooltip;
    json!({
        "plugins": {
            "legend": { "labels": { "color": legend_color } },
            "tooltip": {
                "backgroundColor": background,
                "titleColor": title,
                "bodyColor": body
            }
        },
        "scales": {
            "x": {
                "ticks": { "color": tick_color },
                "grid": { "color": grid_color }
            },
            "y": {
                "ticks": { "color": tick_color },
                "grid": { "color": grid_color }
            }
        }
    })
}

#[must_use]
pub fn aurora() -> Theme {
    Theme::new()
        .with_palette([
            "#4f46e5", "#6366f1", "#22d3ee", "#2dd4bf", "#f97316", "#facc15",
        ])
        .with_border_color("#312e81")
        .with_background_opacity(0.28)
        .with_global_options(record_from_json_value(preset_global_options(
            "#1e1b4b",
            ["#1e293b", "#e0f2fe", "#dbeafe"],
            "#1e293b",
            "rgba(148,163,184,0.18)",
        )))
        .with_dataset_defaults(
            ChartKind::Line,
            record_from_json_value(json!({ "borderWidth": 3 })),
        )
        .with_dataset_defaults(
            ChartKind::Bar,
            record_from_json_value(json!({ "borderRadius": 16 })),
        )
}

#[must_use]
pub fn sunset() -> Theme {
    Theme::new()
        .with_palette([
            "#fb7185", "#f97316", "#facc15", "#fbbf24", "#4ade80", "#38bdf8",
        ])
        .with_border_color("#7f1d1d")
        .with_background_opacity(0.45)
        .with_global_options(record_from_json_value(preset_global_options(
            "#7f1d1d",
            ["#451a03", "#fef3c7", "#fde68a"],
            "#7f1d1d",
            "rgba(249,115,22,0.18)",
        )))
        .with_dataset_defaults(
            ChartKind::Line,
            record_from_json_value(json!({ "tension": 0.35, "fill": true })),
        )
        .with_dataset_defaults(
            ChartKind::Radar,
            record_from_json_value(json!({ "borderWidth": 3 })),
        )
}

#[must_use]
pub fn twilight() -> Theme {
    Theme::new()
        .with_palette([
            "#38bdf8", "#818cf8", "#f472b6", "#facc15", "#34d399", "#f97316",
        ])
        .with_border_color("#e2e8f0")
        .with_background_opacity(0.25)
        .with_global_options(record_from_json_value(preset_global_options(
            "#e2e8f0",
            ["#0f172a", "#f1f5f9", "#cbd5f5"],
            "#cbd5f5",
            "rgba(148,163,184,0.25)",
        )))
        .with_dataset_defaults(
            ChartKind::Line,
            record_from_json_value(json!({ "fill": true, "borderWidth": 3 })),
        )
        .with_dataset_defaults(
            ChartKind::Radar,
            record_from_json_value(json!({ "borderWidth": 2 })),
        )
}

/// All presets in registration order.
#[must_use]
pub fn preset_themes() -> Vec<(&'static str, Theme)> {
    vec![
        (AURORA_THEME_NAME, aurora()),
        (SUNSET_THEME_NAME, sunset()),
        (TWILIGHT_THEME_NAME, twilight()),
    ]
}
