//! Integration hooks for hosts embedding the theme engine.
//!
//! Hooks observe the registry; they never mutate engine internals directly.

pub mod observers;

pub use observers::{ThemeEvent, ThemeObserver};
