mod headless_host;

pub use headless_host::HeadlessRenderHost;

use crate::core::ChartConfiguration;
use crate::error::ThemeResult;

/// Contract implemented by whatever draws charts.
///
/// Hosts receive fully themed configurations; theming stays isolated from
/// drawing code.
pub trait RenderHost {
    fn render(&mut self, config: &ChartConfiguration) -> ThemeResult<()>;

    /// Drops the current visual so the next `render` starts from scratch.
    /// Called when the chart kind changes.
    fn reset(&mut self) {}
}
