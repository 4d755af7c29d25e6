//! Theme preference state machine.
//!
//! The effective mode is never stored. It is recomputed from the explicit
//! preference and the system signal on every read, so a manual choice always
//! wins over the OS until it is explicitly reset.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::{Mode, Preference};

/// Decides light vs dark from a persisted preference and the OS signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreferenceResolver {
    preference: Preference,
    system_prefers_dark: bool,
}

impl ThemePreferenceResolver {
    /// Build from the raw stored value and the current system signal.
    #[must_use]
    pub fn initialize(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        Self {
            preference: Preference::from_stored(stored),
            system_prefers_dark,
        }
    }

    #[must_use]
    pub fn effective_mode(&self) -> Mode {
        self.preference
            .mode()
            .unwrap_or_else(|| Mode::from_dark(self.system_prefers_dark))
    }

    #[must_use]
    pub fn is_following_system(&self) -> bool {
        self.preference == Preference::Unset
    }

    #[must_use]
    pub fn preference(&self) -> Preference {
        self.preference
    }

    #[must_use]
    pub fn system_prefers_dark(&self) -> bool {
        self.system_prefers_dark
    }

    /// Flip the effective mode and pin it as the explicit preference.
    ///
    /// Flips what is on screen, not what was stored: toggling while following a
    /// dark system yields `Light`. The caller persists the returned mode.
    pub fn toggle(&mut self) -> Mode {
        let next = self.effective_mode().flipped();
        self.preference = Preference::from(next);
        next
    }

    /// Drop the explicit preference and follow the system again.
    ///
    /// The caller deletes the persisted value.
    pub fn reset_to_system(&mut self) -> Mode {
        self.preference = Preference::Unset;
        self.effective_mode()
    }

    /// Record a new system signal.
    ///
    /// Returns the mode to render only while following the system; with a
    /// manual choice active the signal is kept but nothing visible changes.
    pub fn on_system_change(&mut self, system_prefers_dark: bool) -> Option<Mode> {
        self.system_prefers_dark = system_prefers_dark;
        self.is_following_system().then(|| self.effective_mode())
    }
}
