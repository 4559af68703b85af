mod active_theme_view;
mod chart_binding;
mod chart_presets;
mod dataset_theming;
mod json_contract;
mod observer_registry;
mod theme_applier;
mod theme_registry;
mod theme_resolver;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{DEFAULT_THEME_NAME, Theme};
use crate::extensions::ThemeObserver;

pub use active_theme_view::ActiveThemeViewStats;
pub use chart_binding::{ChartBinding, SyncOutcome};
pub use chart_presets::{SingleSeriesChart, demo_charts};
pub use dataset_theming::theme_dataset;
pub use json_contract::{THEME_SET_JSON_SCHEMA_V1, ThemeSetJsonContractV1};
pub use theme_applier::theme_configuration;
pub use theme_registry::RegisterOptions;

use active_theme_view::ActiveThemeView;

/// Theme registry plus the resolver/merger that styles chart configurations.
///
/// A fresh engine always holds the built-in [`DEFAULT_THEME_NAME`] theme and
/// has it active, so resolution never observes an empty registry.
pub struct ThemeEngine {
    themes: IndexMap<String, Theme>,
    active_theme_name: String,
    /// Bumped on every registry write, including active-pointer moves.
    registry_revision: u64,
    /// Registry revision at which each name was last registered.
    theme_revisions: IndexMap<String, u64>,
    active_view: ActiveThemeView,
    observers: Vec<Box<dyn ThemeObserver>>,
}

impl ThemeEngine {
    #[must_use]
    pub fn new() -> Self {
        let mut themes = IndexMap::new();
        themes.insert(DEFAULT_THEME_NAME.to_owned(), Theme::builtin_default());
        let mut theme_revisions = IndexMap::new();
        theme_revisions.insert(DEFAULT_THEME_NAME.to_owned(), 0);
        debug!(theme = DEFAULT_THEME_NAME, "theme engine initialized");
        Self {
            themes,
            active_theme_name: DEFAULT_THEME_NAME.to_owned(),
            registry_revision: 0,
            theme_revisions,
            active_view: ActiveThemeView::default(),
            observers: Vec::new(),
        }
    }

    /// Revision of the registry as a whole; moves on any registration or
    /// active-pointer change.
    #[must_use]
    pub fn registry_revision(&self) -> u64 {
        self.registry_revision
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("themes", &self.themes.keys().collect::<Vec<_>>())
            .field("active_theme_name", &self.active_theme_name)
            .field("registry_revision", &self.registry_revision)
            .field("active_revision", &self.active_view.revision())
            .field("observers", &self.observers.len())
            .finish()
    }
}
