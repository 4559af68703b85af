use crate::core::ChartConfiguration;
use crate::error::{ThemeError, ThemeResult};

use super::RenderHost;

/// Host that draws nothing, used by tests and headless tooling.
///
/// It still checks that every dataset reached it with colors resolved, so
/// tests catch configurations a real host would render unstyled.
#[derive(Debug, Default)]
pub struct HeadlessRenderHost {
    pub render_count: usize,
    pub reset_count: usize,
    pub last_config: Option<ChartConfiguration>,
    /// Skip the resolved-colors check (for palettes intentionally left empty).
    pub allow_unstyled: bool,
}

impl HeadlessRenderHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn allowing_unstyled() -> Self {
        Self {
            allow_unstyled: true,
            ..Self::default()
        }
    }
}

impl RenderHost for HeadlessRenderHost {
    fn render(&mut self, config: &ChartConfiguration) -> ThemeResult<()> {
        if !self.allow_unstyled {
            let unstyled = config.datasets.iter().position(|dataset| {
                dataset.border_color().is_none() || dataset.background_color().is_none()
            });
            if let Some(index) = unstyled {
                return Err(ThemeError::InvalidData(format!(
                    "dataset {index} reached the render host without resolved colors"
                )));
            }
        }
        self.render_count += 1;
        self.last_config = Some(config.clone());
        Ok(())
    }

    fn reset(&mut self) {
        self.reset_count += 1;
        self.last_config = None;
    }
}
