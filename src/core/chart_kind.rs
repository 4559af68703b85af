use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Visualization category; decides per-kind defaults and coloring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
    Bubble,
    Scatter,
}

impl ChartKind {
    pub const ALL: [Self; 8] = [
        Self::Bar,
        Self::Line,
        Self::Pie,
        Self::Doughnut,
        Self::Radar,
        Self::PolarArea,
        Self::Bubble,
        Self::Scatter,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Radar => "radar",
            Self::PolarArea => "polarArea",
            Self::Bubble => "bubble",
            Self::Scatter => "scatter",
        }
    }

    /// One visual segment per data point (pie, doughnut, polar area).
    #[must_use]
    pub const fn is_segmented(self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut | Self::PolarArea)
    }

    /// Kinds that draw a stroked path with point markers.
    #[must_use]
    pub const fn is_line_like(self) -> bool {
        matches!(self, Self::Line | Self::Radar)
    }

    /// Segment count used when neither dataset data nor labels give a length.
    #[must_use]
    pub const fn fallback_segment_count(self) -> usize {
        match self {
            Self::Pie | Self::Doughnut => 6,
            Self::Radar | Self::Line => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ThemeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == input)
            .ok_or_else(|| ThemeError::InvalidArgument(format!("unknown chart kind `{input}`")))
    }
}
