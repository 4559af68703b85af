use chart_theme::ThemeError;
use chart_theme::api::{THEME_SET_JSON_SCHEMA_V1, ThemeEngine, ThemeSetJsonContractV1};
use chart_theme::core::{ChartConfiguration, ChartKind, OptionValue, Theme};

#[test]
fn chart_configuration_reads_host_shape() {
    let input = r##"{
        "type": "polarArea",
        "data": {
            "labels": ["a", "b"],
            "datasets": [{ "label": "Share", "data": [1, 2], "borderColor": "#123456" }]
        },
        "options": { "plugins": { "legend": { "display": false } } }
    }"##;

    let config = ChartConfiguration::from_json_str(input).expect("parse config");
    assert_eq!(config.kind, ChartKind::PolarArea);
    assert_eq!(config.label_count(), Some(2));
    assert_eq!(config.datasets[0].data_len(), Some(2));
    assert_eq!(
        config.datasets[0].border_color(),
        Some(&OptionValue::from("#123456"))
    );

    let json = config.to_json_pretty().expect("serialize config");
    let back = ChartConfiguration::from_json_str(&json).expect("reparse");
    assert_eq!(back, config);
}

#[test]
fn missing_labels_stay_unknown() {
    let config = ChartConfiguration::from_json_str(r#"{ "type": "pie", "data": { "datasets": [] } }"#)
        .expect("parse");
    assert_eq!(config.labels, None);
    assert_eq!(config.options, None);
}

#[test]
fn scalar_labels_are_read_as_text() {
    let config = ChartConfiguration::from_json_str(
        r#"{ "type": "bar", "data": { "labels": [2020, 2021.5, "Q3", true], "datasets": [] } }"#,
    )
    .expect("parse config");
    assert_eq!(
        config.labels,
        Some(vec![
            "2020".to_owned(),
            "2021.5".to_owned(),
            "Q3".to_owned(),
            "true".to_owned(),
        ])
    );
}

#[test]
fn structured_labels_are_invalid_data() {
    let err = ChartConfiguration::from_json_str(
        r#"{ "type": "bar", "data": { "labels": [{ "x": 1 }], "datasets": [] } }"#,
    )
    .expect_err("object label");
    assert!(matches!(err, ThemeError::InvalidData(_)));
}

#[test]
fn unknown_chart_kind_is_invalid_data() {
    let err = ChartConfiguration::from_json_str(r#"{ "type": "sankey" }"#).expect_err("bad kind");
    assert!(matches!(err, ThemeError::InvalidData(_)));
}

#[test]
fn theme_json_accepts_partial_definitions() {
    let theme = Theme::from_json_str(r##"{ "palette": ["#000000"], "backgroundOpacity": 2.5 }"##)
        .expect("parse theme");
    assert_eq!(theme.palette, vec!["#000000".to_owned()]);
    assert_eq!(theme.background_opacity, Some(2.5));
    assert!(theme.type_options.is_empty());
}

#[test]
fn theme_set_import_registers_and_activates() {
    let mut engine = ThemeEngine::new();
    let input = r##"{
        "schema_version": 1,
        "active": "night",
        "themes": {
            "night": { "palette": ["#0f172a"], "borderColor": "#e2e8f0" },
            "day": { "palette": ["#fef3c7"] }
        }
    }"##;

    let count = engine.import_theme_set_json(input).expect("import");
    assert_eq!(count, 2);
    assert_eq!(engine.active_theme_name(), "night");
    assert_eq!(engine.list_themes(), vec!["default", "night", "day"]);
}

#[test]
fn rejected_theme_set_leaves_registry_untouched() {
    let mut engine = ThemeEngine::new();
    let revision = engine.registry_revision();

    let blank_name = r#"{ "schema_version": 1, "themes": { "ok": {}, " ": {} } }"#;
    assert!(matches!(
        engine.import_theme_set_json(blank_name),
        Err(ThemeError::InvalidArgument(_))
    ));

    let missing_active = r#"{ "schema_version": 1, "active": "ghost", "themes": { "ok": {} } }"#;
    assert!(matches!(
        engine.import_theme_set_json(missing_active),
        Err(ThemeError::NotFound { .. })
    ));

    let wrong_version = r#"{ "schema_version": 7, "themes": {} }"#;
    assert!(matches!(
        engine.import_theme_set_json(wrong_version),
        Err(ThemeError::InvalidData(_))
    ));

    assert_eq!(engine.registry_revision(), revision);
    assert_eq!(engine.theme_count(), 1);
}

#[test]
fn exported_theme_set_round_trips_into_a_fresh_engine() {
    let mut source = ThemeEngine::new();
    source.register_preset_themes().expect("presets");
    let exported = source.export_theme_set_json_pretty().expect("export");

    let payload = ThemeSetJsonContractV1::from_json_str(&exported).expect("payload");
    assert_eq!(payload.schema_version, THEME_SET_JSON_SCHEMA_V1);
    assert_eq!(payload.active.as_deref(), Some("aurora"));

    let mut target = ThemeEngine::new();
    target.import_theme_set_json(&exported).expect("import");
    assert_eq!(target.list_themes(), source.list_themes());
    assert_eq!(target.active_theme_name(), "aurora");
    assert_eq!(
        target.resolve_theme(Some("sunset")).expect("sunset"),
        source.resolve_theme(Some("sunset")).expect("sunset")
    );
}
