use chart_theme::api::{SingleSeriesChart, ThemeEngine, demo_charts};
use chart_theme::core::{ChartKind, Dataset, OptionValue, record_pointer};

#[test]
fn each_preset_uses_its_kind_and_default_label() {
    let chart = SingleSeriesChart::new(["a", "b", "c"], vec![1.0, 2.0, 3.0]);

    let cases = [
        (chart.pie(), ChartKind::Doughnut, "Distribution"),
        (chart.bar(), ChartKind::Bar, "Values"),
        (chart.line(), ChartKind::Line, "Trend"),
        (chart.radar(), ChartKind::Radar, "Performance"),
    ];
    for (config, kind, label) in cases {
        assert_eq!(config.kind, kind);
        assert_eq!(config.label_count(), Some(3));
        assert_eq!(config.datasets.len(), 1);
        assert_eq!(config.datasets[0].label(), Some(label));
        assert_eq!(config.datasets[0].data(), vec![1.0, 2.0, 3.0]);
    }
}

#[test]
fn line_preset_defaults_yield_to_overrides() {
    let plain = SingleSeriesChart::new(["a"], vec![1.0]).line();
    assert_eq!(plain.datasets[0].field("tension"), Some(&OptionValue::Number(0.35)));
    assert_eq!(plain.datasets[0].field("fill"), Some(&OptionValue::Bool(true)));

    let overridden = SingleSeriesChart::new(["a"], vec![1.0])
        .with_dataset_overrides(
            Dataset::new()
                .with_label("Velocity")
                .with_field("fill", false)
                .with_field("data", vec![9.0]),
        )
        .line();
    let dataset = &overridden.datasets[0];
    assert_eq!(dataset.label(), Some("Velocity"));
    assert_eq!(dataset.field("fill"), Some(&OptionValue::Bool(false)));
    assert_eq!(dataset.data(), vec![9.0]);
}

#[test]
fn demo_charts_theme_cleanly_with_every_preset() {
    let mut engine = ThemeEngine::new();
    engine.register_preset_themes().expect("presets");

    for theme in engine.list_themes() {
        for (name, config) in demo_charts() {
            let themed = engine
                .apply_theme(&config, Some(&theme))
                .expect("apply theme");
            let dataset = &themed.datasets[0];
            assert!(dataset.border_color().is_some(), "{theme}/{name}");
            assert!(dataset.background_color().is_some(), "{theme}/{name}");
        }
    }
}

#[test]
fn demo_pie_keeps_caller_legend_over_theme() {
    let engine = ThemeEngine::new();
    let (_, pie) = demo_charts()
        .into_iter()
        .find(|(name, _)| *name == "pie")
        .expect("pie demo");
    let themed = engine.apply_theme(&pie, None).expect("apply theme");
    let options = themed.options.expect("options");

    assert_eq!(
        record_pointer(&options, "plugins.legend.position"),
        Some(&OptionValue::from("bottom"))
    );
    assert_eq!(record_pointer(&options, "cutout"), Some(&OptionValue::from("58%")));
    assert_eq!(
        themed.datasets[0]
            .background_color()
            .and_then(OptionValue::as_sequence)
            .map(<[OptionValue]>::len),
        Some(3)
    );
}
