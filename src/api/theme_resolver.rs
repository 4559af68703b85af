use tracing::{debug, warn};

use crate::core::{DEFAULT_THEME_NAME, Theme};
use crate::error::{ThemeError, ThemeResult};

use super::ThemeEngine;

impl ThemeEngine {
    /// Returns an owned copy of the requested theme, or of the active theme
    /// when `requested` is `None` or not registered.
    ///
    /// Never mutates the registry; the returned theme shares nothing with it.
    pub fn resolve_theme(&self, requested: Option<&str>) -> ThemeResult<Theme> {
        if let Some(name) = requested {
            if let Some(theme) = self.themes.get(name) {
                return Ok(theme.clone());
            }
            debug!(
                requested = name,
                active = %self.active_theme_name,
                "requested theme not registered, using active theme"
            );
        }

        if let Some(theme) = self.themes.get(&self.active_theme_name) {
            return Ok(theme.clone());
        }

        warn!(
            active = %self.active_theme_name,
            "active theme missing from registry, using default theme"
        );
        self.themes
            .get(DEFAULT_THEME_NAME)
            .cloned()
            .ok_or(ThemeError::NoThemeAvailable)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use crate::api::ThemeEngine;
    use crate::api::active_theme_view::ActiveThemeView;
    use crate::core::{DEFAULT_THEME_NAME, Theme};
    use crate::error::ThemeError;

    fn engine_with(themes: IndexMap<String, Theme>, active: &str) -> ThemeEngine {
        ThemeEngine {
            themes,
            active_theme_name: active.to_owned(),
            registry_revision: 0,
            theme_revisions: IndexMap::new(),
            active_view: ActiveThemeView::default(),
            observers: Vec::new(),
        }
    }

    #[test]
    fn dangling_active_pointer_falls_back_to_default_theme() {
        let mut themes = IndexMap::new();
        themes.insert(DEFAULT_THEME_NAME.to_owned(), Theme::builtin_default());
        let engine = engine_with(themes, "gone");

        let theme = engine.resolve_theme(None).expect("default fallback");
        assert_eq!(theme, Theme::builtin_default());
    }

    #[test]
    fn empty_registry_reports_no_theme_available() {
        let engine = engine_with(IndexMap::new(), "gone");
        assert_eq!(
            engine.resolve_theme(Some("also-gone")),
            Err(ThemeError::NoThemeAvailable)
        );
    }
}
