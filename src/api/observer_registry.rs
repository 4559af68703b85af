use tracing::trace;

use crate::error::{ThemeError, ThemeResult};
use crate::extensions::{ThemeEvent, ThemeObserver};

use super::ThemeEngine;

impl ThemeEngine {
    /// Registers an observer with a unique, non-empty identifier.
    pub fn register_observer(&mut self, observer: Box<dyn ThemeObserver>) -> ThemeResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.trim().is_empty() {
            return Err(ThemeError::InvalidArgument(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ThemeError::DuplicateObserver { id: observer_id });
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    pub(super) fn emit_theme_event(&mut self, event: &ThemeEvent) {
        if self.observers.is_empty() {
            return;
        }
        trace!(?event, observers = self.observers.len(), "dispatch theme event");
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}
