use tracing::{debug, warn};

use crate::core::Theme;
use crate::core::presets::{AURORA_THEME_NAME, preset_themes};
use crate::error::{ThemeError, ThemeResult};
use crate::extensions::ThemeEvent;

use super::ThemeEngine;

/// Extra behavior for [`ThemeEngine::register_theme_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterOptions {
    /// Also make the registered theme active.
    pub set_active: bool,
}

impl RegisterOptions {
    #[must_use]
    pub fn active() -> Self {
        Self { set_active: true }
    }
}

impl ThemeEngine {
    /// Stores `theme` under `name`, replacing any previous entry.
    pub fn register_theme(&mut self, name: &str, theme: Theme) -> ThemeResult<()> {
        self.register_theme_with(name, theme, RegisterOptions::default())
    }

    /// Stores `theme` under `name` and optionally activates it.
    ///
    /// Fails with [`ThemeError::InvalidArgument`] for empty or whitespace-only
    /// names before touching any state.
    pub fn register_theme_with(
        &mut self,
        name: &str,
        theme: Theme,
        options: RegisterOptions,
    ) -> ThemeResult<()> {
        validate_theme_name(name)?;

        let replaced = self.themes.insert(name.to_owned(), theme).is_some();
        self.registry_revision += 1;
        self.theme_revisions.insert(name.to_owned(), self.registry_revision);
        debug!(
            theme = name,
            replaced,
            set_active = options.set_active,
            "register theme"
        );
        self.emit_theme_event(&ThemeEvent::Registered {
            name: name.to_owned(),
            replaced,
        });

        if name == self.active_theme_name {
            let revision = self.active_view.invalidate();
            self.emit_theme_event(&ThemeEvent::ActiveUpdated {
                name: name.to_owned(),
                revision,
            });
        } else if options.set_active {
            self.set_active_theme(name)?;
        }
        Ok(())
    }

    /// Registered names in registration order.
    #[must_use]
    pub fn list_themes(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    /// Registered names with the active theme first, the rest sorted
    /// case-insensitively. Suited to theme pickers.
    #[must_use]
    pub fn list_themes_active_first(&self) -> Vec<String> {
        let mut names = self.list_themes();
        names.sort_by(|a, b| {
            let a_active = *a == self.active_theme_name;
            let b_active = *b == self.active_theme_name;
            b_active
                .cmp(&a_active)
                .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
                .then_with(|| a.cmp(b))
        });
        names
    }

    #[must_use]
    pub fn has_theme(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Revision of the contents registered under `name`; moves only when that
    /// name is registered again.
    #[must_use]
    pub fn theme_revision(&self, name: &str) -> Option<u64> {
        self.theme_revisions.get(name).copied()
    }

    #[must_use]
    pub fn theme_count(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn active_theme_name(&self) -> &str {
        &self.active_theme_name
    }

    /// Moves the active pointer. Unknown names fail with
    /// [`ThemeError::NotFound`] and leave the pointer unchanged.
    pub fn set_active_theme(&mut self, name: &str) -> ThemeResult<()> {
        if !self.themes.contains_key(name) {
            warn!(theme = name, "cannot activate unregistered theme");
            return Err(ThemeError::NotFound {
                name: name.to_owned(),
            });
        }
        if self.active_theme_name == name {
            return Ok(());
        }

        let previous = std::mem::replace(&mut self.active_theme_name, name.to_owned());
        self.registry_revision += 1;
        let revision = self.active_view.invalidate();
        debug!(previous = %previous, current = name, revision, "active theme changed");
        self.emit_theme_event(&ThemeEvent::ActiveChanged {
            previous,
            current: name.to_owned(),
            revision,
        });
        Ok(())
    }

    /// Registers the `aurora`, `sunset` and `twilight` presets and activates
    /// `aurora`.
    pub fn register_preset_themes(&mut self) -> ThemeResult<()> {
        for (name, theme) in preset_themes() {
            let options = RegisterOptions {
                set_active: name == AURORA_THEME_NAME,
            };
            self.register_theme_with(name, theme, options)?;
        }
        Ok(())
    }
}

pub(super) fn validate_theme_name(name: &str) -> ThemeResult<()> {
    if name.trim().is_empty() {
        return Err(ThemeError::InvalidArgument(
            "theme name must be a non-empty string".to_owned(),
        ));
    }
    Ok(())
}
