use tracing::debug;

use crate::core::{ChartConfiguration, ChartKind, Dataset, OptionRecord};
use crate::error::ThemeResult;
use crate::render::RenderHost;

use super::ThemeEngine;

/// What [`ChartBinding::sync`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Inputs and theme were unchanged; the host was not called.
    Unchanged,
    /// First configuration handed to the host.
    Mounted,
    /// Same chart kind, new data/options/colors handed to the host.
    Updated,
    /// Chart kind changed; the host was reset before rendering.
    Recreated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThemeStamp {
    /// Revision of the explicitly named theme.
    Named(u64),
    /// Active-theme revision, used when no registered theme is named.
    Active(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SyncStamp {
    inputs_revision: u64,
    theme: ThemeStamp,
}

/// Caller-side chart inputs bound to a render host.
///
/// Keeps the raw inputs, themes them on demand and only calls the host when
/// the inputs changed or the theme they follow did. Without an explicit theme,
/// or when the named theme is not registered, the binding follows the engine's
/// active theme; a registered explicit theme is only tracked by its own
/// registrations.
#[derive(Debug, Clone)]
pub struct ChartBinding {
    kind: ChartKind,
    labels: Vec<String>,
    datasets: Vec<Dataset>,
    options: Option<OptionRecord>,
    theme: Option<String>,
    inputs_revision: u64,
    last_sync: Option<SyncStamp>,
    mounted_kind: Option<ChartKind>,
}

impl ChartBinding {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            labels: Vec::new(),
            datasets: Vec::new(),
            options: None,
            theme: None,
            inputs_revision: 0,
            last_sync: None,
            mounted_kind: None,
        }
    }

    /// Binding seeded from an existing configuration.
    #[must_use]
    pub fn from_configuration(config: ChartConfiguration) -> Self {
        let mut binding = Self::new(config.kind);
        binding.labels = config.labels.unwrap_or_default();
        binding.datasets = config.datasets;
        binding.options = config.options;
        binding
    }

    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.set_theme(Some(theme.into()));
        self
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        self.kind = kind;
        self.touch();
    }

    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
        self.touch();
    }

    pub fn set_datasets(&mut self, datasets: Vec<Dataset>) {
        self.datasets = datasets;
        self.touch();
    }

    pub fn set_options(&mut self, options: Option<OptionRecord>) {
        self.options = options;
        self.touch();
    }

    /// `None` follows the engine's active theme.
    pub fn set_theme(&mut self, theme: Option<String>) {
        self.theme = theme;
        self.touch();
    }

    /// Unthemed configuration built from the current inputs.
    #[must_use]
    pub fn base_configuration(&self) -> ChartConfiguration {
        ChartConfiguration {
            kind: self.kind,
            labels: Some(self.labels.clone()),
            datasets: self.datasets.clone(),
            options: self.options.clone(),
        }
    }

    pub fn themed_configuration(&self, engine: &ThemeEngine) -> ThemeResult<ChartConfiguration> {
        engine.apply_theme(&self.base_configuration(), self.theme.as_deref())
    }

    /// Hands the themed configuration to `host` when anything it depends on
    /// changed since the last sync.
    pub fn sync<H: RenderHost>(
        &mut self,
        engine: &ThemeEngine,
        host: &mut H,
    ) -> ThemeResult<SyncOutcome> {
        let stamp = SyncStamp {
            inputs_revision: self.inputs_revision,
            theme: self.theme_stamp(engine),
        };
        if self.last_sync == Some(stamp) {
            return Ok(SyncOutcome::Unchanged);
        }

        let config = self.themed_configuration(engine)?;
        let outcome = match self.mounted_kind {
            None => SyncOutcome::Mounted,
            Some(kind) if kind != config.kind => {
                host.reset();
                SyncOutcome::Recreated
            }
            Some(_) => SyncOutcome::Updated,
        };
        host.render(&config)?;

        debug!(
            kind = %config.kind,
            ?outcome,
            inputs_revision = stamp.inputs_revision,
            theme = ?stamp.theme,
            "chart binding synced"
        );
        self.mounted_kind = Some(config.kind);
        self.last_sync = Some(stamp);
        Ok(outcome)
    }

    /// Releases the host; the next sync mounts again.
    pub fn detach<H: RenderHost>(&mut self, host: &mut H) {
        if self.mounted_kind.take().is_some() {
            host.reset();
        }
        self.last_sync = None;
    }

    fn theme_stamp(&self, engine: &ThemeEngine) -> ThemeStamp {
        // Unregistered names resolve to the active theme.
        self.theme
            .as_deref()
            .and_then(|name| engine.theme_revision(name))
            .map_or_else(
                || ThemeStamp::Active(engine.active_revision()),
                ThemeStamp::Named,
            )
    }

    fn touch(&mut self) {
        self.inputs_revision += 1;
    }
}
