use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::chart_kind::ChartKind;
use super::color::DEFAULT_BACKGROUND_OPACITY;
use super::value::{OptionRecord, record_from_json_value};

/// Name of the built-in theme registered and activated at engine creation.
pub const DEFAULT_THEME_NAME: &str = "default";

/// Named bundle of styling intent: palette, fallback stroke, fill opacity and
/// option/dataset defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    /// Base colors cycled by dataset (or segment) index.
    pub palette: Vec<String>,
    /// Stroke color used instead of the palette color when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Fill opacity for derived translucent colors. Not clamped here; clamped
    /// when colors are derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_opacity: Option<f64>,
    /// Options applied to every chart kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_options: Option<OptionRecord>,
    /// Options applied only to the keyed chart kind, over `global_options`.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub type_options: IndexMap<ChartKind, OptionRecord>,
    /// Dataset fields applied under caller fields for the keyed chart kind.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub dataset_defaults: IndexMap<ChartKind, OptionRecord>,
}

impl Theme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_background_opacity(mut self, opacity: f64) -> Self {
        self.background_opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn with_global_options(mut self, options: OptionRecord) -> Self {
        self.global_options = Some(options);
        self
    }

    #[must_use]
    pub fn with_type_options(mut self, kind: ChartKind, options: OptionRecord) -> Self {
        self.type_options.insert(kind, options);
        self
    }

    #[must_use]
    pub fn with_dataset_defaults(mut self, kind: ChartKind, defaults: OptionRecord) -> Self {
        self.dataset_defaults.insert(kind, defaults);
        self
    }

    /// Palette color for `index`, cycling when the palette is shorter.
    #[must_use]
    pub fn palette_color(&self, index: usize) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        Some(&self.palette[index % self.palette.len()])
    }

    /// Configured fill opacity or [`DEFAULT_BACKGROUND_OPACITY`].
    #[must_use]
    pub fn effective_background_opacity(&self) -> f64 {
        self.background_opacity.unwrap_or(DEFAULT_BACKGROUND_OPACITY)
    }

    #[must_use]
    pub fn type_options_for(&self, kind: ChartKind) -> Option<&OptionRecord> {
        self.type_options.get(&kind)
    }

    #[must_use]
    pub fn dataset_defaults_for(&self, kind: ChartKind) -> Option<&OptionRecord> {
        self.dataset_defaults.get(&kind)
    }

    /// The theme registered under [`DEFAULT_THEME_NAME`].
    #[must_use]
    pub fn builtin_default() -> Self {
        Self::new()
            .with_palette([
                "#2563eb", "#22c55e", "#f97316", "#0ea5e9", "#a855f7", "#eab308",
            ])
            .with_border_color("#0f172a")
            .with_background_opacity(0.32)
            .with_global_options(record_from_json_value(json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": {
                    "legend": {
                        "position": "top",
                        "labels": {
                            "color": "#0f172a",
                            "boxWidth": 16,
                            "font": { "weight": 500 }
                        }
                    },
                    "tooltip": {
                        "backgroundColor": "#111827",
                        "titleColor": "#f8fafc",
                        "bodyColor": "#e5e7eb",
                        "borderColor": "rgba(241,245,249,0.2)",
                        "borderWidth": 1,
                        "padding": 10
                    }
                },
                "elements": {
                    "line": { "tension": 0.35, "borderWidth": 3 },
                    "bar": { "borderWidth": 0 }
                },
                "scales": {
                    "x": {
                        "grid": { "color": "rgba(148,163,184,0.2)" },
                        "ticks": { "color": "#475569" }
                    },
                    "y": {
                        "grid": { "color": "rgba(148,163,184,0.2)" },
                        "ticks": { "color": "#475569" },
                        "beginAtZero": true
                    }
                }
            })))
            .with_type_options(
                ChartKind::Radar,
                record_from_json_value(json!({
                    "scales": {
                        "r": {
                            "angleLines": { "color": "rgba(148,163,184,0.3)" },
                            "grid": { "color": "rgba(148,163,184,0.25)" },
                            "pointLabels": { "color": "#0f172a", "font": { "size": 12 } },
                            "ticks": { "display": false }
                        }
                    }
                })),
            )
            .with_type_options(
                ChartKind::Line,
                record_from_json_value(json!({
                    "plugins": { "legend": { "display": true, "position": "top" } }
                })),
            )
            .with_dataset_defaults(
                ChartKind::Line,
                record_from_json_value(json!({
                    "fill": true,
                    "pointRadius": 4,
                    "pointHoverRadius": 6,
                    "borderCapStyle": "round"
                })),
            )
            .with_dataset_defaults(
                ChartKind::Radar,
                record_from_json_value(json!({ "fill": true, "borderWidth": 2 })),
            )
            .with_dataset_defaults(
                ChartKind::Bar,
                record_from_json_value(json!({ "borderRadius": 8, "borderSkipped": false })),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_THEME_NAME, Theme};
    use crate::core::chart_kind::ChartKind;

    #[test]
    fn palette_color_cycles_and_handles_empty_palette() {
        let theme = Theme::new().with_palette(["#000001", "#000002"]);
        assert_eq!(theme.palette_color(0), Some("#000001"));
        assert_eq!(theme.palette_color(3), Some("#000002"));
        assert_eq!(Theme::new().palette_color(0), None);
    }

    #[test]
    fn builtin_default_carries_kind_specific_defaults() {
        let theme = Theme::builtin_default();
        assert_eq!(DEFAULT_THEME_NAME, "default");
        assert_eq!(theme.palette.len(), 6);
        assert!(theme.type_options_for(ChartKind::Radar).is_some());
        assert!(theme.type_options_for(ChartKind::Bar).is_none());
        assert!(theme.dataset_defaults_for(ChartKind::Bar).is_some());
        assert_eq!(theme.effective_background_opacity(), 0.32);
    }

    #[test]
    fn serde_uses_camel_case_and_chart_kind_keys() {
        let json = serde_json::to_value(Theme::builtin_default()).expect("serialize");
        assert_eq!(json["borderColor"], "#0f172a");
        assert_eq!(json["backgroundOpacity"], 0.32);
        assert_eq!(json["datasetDefaults"]["bar"]["borderRadius"], 8.0);

        let back: Theme = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, Theme::builtin_default());
    }
}
