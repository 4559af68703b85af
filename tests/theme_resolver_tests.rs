use chart_theme::api::{RegisterOptions, ThemeEngine};
use chart_theme::core::Theme;

#[test]
fn explicit_registered_name_wins_over_active_theme() {
    let mut engine = ThemeEngine::new();
    engine
        .register_theme("mono", Theme::new().with_palette(["#000000"]))
        .expect("register mono");

    let theme = engine.resolve_theme(Some("mono")).expect("resolve mono");
    assert_eq!(theme.palette, vec!["#000000".to_owned()]);
}

#[test]
fn unknown_or_missing_name_falls_back_to_active_theme() {
    let mut engine = ThemeEngine::new();
    let mono = Theme::new().with_palette(["#000000"]);
    engine
        .register_theme_with("mono", mono.clone(), RegisterOptions::active())
        .expect("register mono");

    assert_eq!(engine.resolve_theme(None).expect("active"), mono);
    assert_eq!(engine.resolve_theme(Some("missing")).expect("fallback"), mono);
    assert_eq!(engine.resolve_theme(Some("")).expect("empty name"), mono);
}

#[test]
fn resolving_does_not_touch_registry_state() {
    let mut engine = ThemeEngine::new();
    engine
        .register_theme("mono", Theme::new().with_palette(["#000000"]))
        .expect("register mono");
    let registry_revision = engine.registry_revision();
    let active_revision = engine.active_revision();

    let _ = engine.resolve_theme(Some("mono")).expect("resolve");
    let _ = engine.resolve_theme(Some("missing")).expect("resolve fallback");

    assert_eq!(engine.registry_revision(), registry_revision);
    assert_eq!(engine.active_revision(), active_revision);
    assert_eq!(engine.active_theme_name(), "default");
}
