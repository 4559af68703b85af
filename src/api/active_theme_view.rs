use std::cell::{Cell, RefCell};

use tracing::trace;

use crate::core::Theme;
use crate::error::ThemeResult;

use super::ThemeEngine;

/// Runtime counters for the cached active-theme view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveThemeViewStats {
    pub revision: u64,
    pub hits: u64,
    pub recomputations: u64,
}

/// Lazily recomputed copy of the active theme.
///
/// Writes that can change the active theme call [`ActiveThemeView::invalidate`];
/// the next read recomputes and caches until the following write.
#[derive(Debug, Default)]
pub(super) struct ActiveThemeView {
    revision: u64,
    cached: RefCell<Option<Theme>>,
    hits: Cell<u64>,
    recomputations: Cell<u64>,
}

impl ActiveThemeView {
    /// Drops the cached copy and returns the new revision.
    pub(super) fn invalidate(&mut self) -> u64 {
        self.revision += 1;
        self.cached.get_mut().take();
        self.revision
    }

    pub(super) fn revision(&self) -> u64 {
        self.revision
    }

    fn stats(&self) -> ActiveThemeViewStats {
        ActiveThemeViewStats {
            revision: self.revision,
            hits: self.hits.get(),
            recomputations: self.recomputations.get(),
        }
    }
}

impl ThemeEngine {
    /// Contents of the active theme, served from cache while no write
    /// invalidated it.
    pub fn active_theme(&self) -> ThemeResult<Theme> {
        let view = &self.active_view;
        if let Some(theme) = view.cached.borrow().as_ref() {
            view.hits.set(view.hits.get() + 1);
            return Ok(theme.clone());
        }

        let theme = self.resolve_theme(None)?;
        view.recomputations.set(view.recomputations.get() + 1);
        trace!(
            theme = %self.active_theme_name,
            revision = view.revision,
            "recomputed active theme view"
        );
        *view.cached.borrow_mut() = Some(theme.clone());
        Ok(theme)
    }

    /// Revision of the active theme; moves whenever the pointer changes or the
    /// active theme is re-registered. Hosts compare it to decide re-theming.
    #[must_use]
    pub fn active_revision(&self) -> u64 {
        self.active_view.revision()
    }

    #[must_use]
    pub fn active_theme_view_stats(&self) -> ActiveThemeViewStats {
        self.active_view.stats()
    }
}
