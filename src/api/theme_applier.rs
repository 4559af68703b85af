use tracing::{debug, trace};

use crate::core::{ChartConfiguration, OptionRecord, Theme, merge_option_sets};
use crate::error::ThemeResult;

use super::{ThemeEngine, theme_dataset};

impl ThemeEngine {
    /// Returns a themed copy of `config` using `explicit_theme` when it is
    /// registered, otherwise the active theme.
    ///
    /// `config` is never modified and the result shares no data with it or
    /// with the registry.
    pub fn apply_theme(
        &self,
        config: &ChartConfiguration,
        explicit_theme: Option<&str>,
    ) -> ThemeResult<ChartConfiguration> {
        let theme = self.resolve_theme(explicit_theme)?;
        debug!(
            kind = %config.kind,
            explicit_theme,
            active_theme = %self.active_theme_name,
            datasets = config.datasets.len(),
            "apply theme"
        );
        Ok(theme_configuration(config, &theme))
    }

    /// Deep-merges option bags left to right; later bags win field by field
    /// and `None` entries are skipped.
    #[must_use]
    pub fn merge_options(&self, option_sets: &[Option<&OptionRecord>]) -> Option<OptionRecord> {
        merge_option_sets(option_sets)
    }
}

/// Applies an already resolved theme to a configuration.
#[must_use]
pub fn theme_configuration(config: &ChartConfiguration, theme: &Theme) -> ChartConfiguration {
    let base = config.clone();
    let label_count = base.label_count();

    let datasets = base
        .datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| {
            trace!(index, kind = %base.kind, "theme dataset");
            theme_dataset(dataset, index, theme, base.kind, label_count)
        })
        .collect();

    let options = merge_option_sets(&[
        theme.global_options.as_ref(),
        theme.type_options_for(base.kind),
        base.options.as_ref(),
    ]);

    ChartConfiguration {
        kind: base.kind,
        labels: base.labels,
        datasets,
        options,
    }
}
