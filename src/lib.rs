//! chart-theme: theme registry and deep-merge engine for chart configurations.
//!
//! Hosts register named themes, pick an active one and ask the engine for a
//! themed copy of each chart configuration before handing it to whatever
//! draws it. Theming never mutates caller data and never draws.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartBinding, RegisterOptions, ThemeEngine};
pub use crate::core::{ChartConfiguration, ChartKind, Dataset, OptionRecord, OptionValue, Theme};
pub use error::{ThemeError, ThemeResult};
