use chart_theme::ThemeError;
use chart_theme::api::{RegisterOptions, ThemeEngine};
use chart_theme::core::{DEFAULT_THEME_NAME, Theme};

fn palette_theme(color: &str) -> Theme {
    Theme::new().with_palette([color])
}

#[test]
fn empty_or_whitespace_name_is_rejected_without_mutation() {
    let mut engine = ThemeEngine::new();
    let revision = engine.registry_revision();

    for name in ["", "   ", "\t\n"] {
        let err = engine
            .register_theme_with(name, palette_theme("#111111"), RegisterOptions::active())
            .expect_err("blank name must fail");
        assert!(matches!(err, ThemeError::InvalidArgument(_)));
    }

    assert_eq!(engine.list_themes(), vec![DEFAULT_THEME_NAME.to_owned()]);
    assert_eq!(engine.active_theme_name(), DEFAULT_THEME_NAME);
    assert_eq!(engine.registry_revision(), revision);
}

#[test]
fn registering_existing_name_replaces_entry() {
    let mut engine = ThemeEngine::new();
    engine
        .register_theme("ocean", palette_theme("#000080"))
        .expect("register ocean");
    engine
        .register_theme("ocean", palette_theme("#008080"))
        .expect("replace ocean");

    assert_eq!(engine.theme_count(), 2);
    let ocean = engine.resolve_theme(Some("ocean")).expect("resolve ocean");
    assert_eq!(ocean.palette, vec!["#008080".to_owned()]);
}

#[test]
fn register_without_set_active_keeps_pointer() {
    let mut engine = ThemeEngine::new();
    engine
        .register_theme("ocean", palette_theme("#000080"))
        .expect("register ocean");
    assert_eq!(engine.active_theme_name(), DEFAULT_THEME_NAME);

    engine
        .register_theme_with("forest", palette_theme("#228b22"), RegisterOptions::active())
        .expect("register forest");
    assert_eq!(engine.active_theme_name(), "forest");
}

#[test]
fn list_themes_follows_registration_order() {
    let mut engine = ThemeEngine::new();
    for name in ["zeta", "alpha", "Mid"] {
        engine
            .register_theme(name, palette_theme("#123456"))
            .expect("register");
    }
    assert_eq!(
        engine.list_themes(),
        vec!["default", "zeta", "alpha", "Mid"]
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>()
    );
}

#[test]
fn picker_listing_puts_active_theme_first_then_sorts() {
    let mut engine = ThemeEngine::new();
    engine.register_preset_themes().expect("presets");
    assert_eq!(engine.active_theme_name(), "aurora");
    assert_eq!(
        engine.list_themes_active_first(),
        vec!["aurora", "default", "sunset", "twilight"]
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>()
    );

    engine.set_active_theme("twilight").expect("activate twilight");
    assert_eq!(engine.list_themes_active_first()[0], "twilight");
}

#[test]
fn set_active_unknown_name_fails_and_keeps_pointer() {
    let mut engine = ThemeEngine::new();
    let revision = engine.active_revision();

    let err = engine.set_active_theme("nope").expect_err("unknown theme");
    assert_eq!(
        err,
        ThemeError::NotFound {
            name: "nope".to_owned()
        }
    );
    assert_eq!(engine.active_theme_name(), DEFAULT_THEME_NAME);
    assert_eq!(engine.active_revision(), revision);
}

#[test]
fn stored_theme_is_isolated_from_caller_copies() {
    let mut engine = ThemeEngine::new();
    let theme = palette_theme("#abcdef");
    engine
        .register_theme("copy", theme.clone())
        .expect("register copy");

    let mut resolved = engine.resolve_theme(Some("copy")).expect("resolve");
    resolved.palette.push("#000000".to_owned());
    resolved.border_color = Some("#ffffff".to_owned());

    assert_eq!(engine.resolve_theme(Some("copy")).expect("resolve again"), theme);
}
