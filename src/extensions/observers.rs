use serde::{Deserialize, Serialize};

/// Registry change notifications delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeEvent {
    /// A theme was stored. `replaced` is true when the name already existed.
    Registered { name: String, replaced: bool },
    /// The active pointer moved to another theme.
    ActiveChanged {
        previous: String,
        current: String,
        revision: u64,
    },
    /// The active theme was re-registered with new contents.
    ActiveUpdated { name: String, revision: u64 },
}

impl ThemeEvent {
    /// True when visuals following the active theme should be re-themed.
    #[must_use]
    pub fn affects_active_theme(&self) -> bool {
        matches!(
            self,
            Self::ActiveChanged { .. } | Self::ActiveUpdated { .. }
        )
    }
}

/// Hook interface for hosts that re-theme visuals on registry changes.
///
/// Observers are called synchronously, in registration order, after the
/// write that produced the event has completed.
pub trait ThemeObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ThemeEvent);
}
