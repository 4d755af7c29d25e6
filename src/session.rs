//! Theme session: the resolver plus the store that persists its choices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Event handlers call one mutating method per user action or OS
//! notification, then re-render from [`ThemeSession::view`]. Storage failures
//! are logged and otherwise ignored; the in-memory state still changes so the
//! page keeps responding for the current visit.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use theme::{Mode, Preference, ThemeLabels, ThemePreferenceResolver, ThemeView};

use crate::store::PreferenceStore;

/// What caused a visible theme change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// Click on the toggle.
    Manual,
    /// OS color-scheme change while following the system.
    System,
    /// Explicit return to following the system.
    Reset,
}

impl fmt::Display for ChangeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Manual => "manual",
            Self::System => "system",
            Self::Reset => "reset",
        })
    }
}

/// A resolver paired with the store that persists its explicit choices.
pub struct ThemeSession<S> {
    resolver: ThemePreferenceResolver,
    store: S,
}

impl<S: PreferenceStore> ThemeSession<S> {
    /// Load the stored choice and combine it with the current system signal.
    pub fn start(store: S, system_prefers_dark: bool) -> Self {
        let stored = match store.load() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme: {err}; following system");
                None
            }
        };
        let resolver = ThemePreferenceResolver::initialize(stored.as_deref(), system_prefers_dark);
        if let Some(raw) = stored.as_deref() {
            if resolver.preference() == Preference::Unset {
                log::debug!("theme: ignoring unrecognized stored value {raw:?}");
            }
        }
        log::info!(
            "theme: start mode={} preference={} system_dark={system_prefers_dark}",
            resolver.effective_mode(),
            resolver.preference(),
        );
        Self { resolver, store }
    }

    /// Flip the visible mode and persist it as the explicit choice.
    pub fn toggle(&mut self) -> Mode {
        let mode = self.resolver.toggle();
        if let Err(err) = self.store.save(mode) {
            log::warn!("theme: {err}");
        }
        log_change(mode, ChangeSource::Manual);
        mode
    }

    /// Forget the explicit choice and follow the system again.
    pub fn reset_to_system(&mut self) -> Mode {
        let mode = self.resolver.reset_to_system();
        if let Err(err) = self.store.clear() {
            log::warn!("theme: {err}");
        }
        log_change(mode, ChangeSource::Reset);
        mode
    }

    /// Record an OS change. `Some` means the page must re-render.
    pub fn on_system_change(&mut self, system_prefers_dark: bool) -> Option<Mode> {
        let applied = self.resolver.on_system_change(system_prefers_dark);
        match applied {
            Some(mode) => log_change(mode, ChangeSource::System),
            None => log::debug!(
                "theme: system_dark={system_prefers_dark} ignored, manual {} active",
                self.resolver.preference()
            ),
        }
        applied
    }

    #[must_use]
    pub fn effective_mode(&self) -> Mode {
        self.resolver.effective_mode()
    }

    #[must_use]
    pub fn is_following_system(&self) -> bool {
        self.resolver.is_following_system()
    }

    #[must_use]
    pub fn resolver(&self) -> &ThemePreferenceResolver {
        &self.resolver
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn view<'a>(&self, labels: &'a ThemeLabels) -> ThemeView<'a> {
        ThemeView::render(&self.resolver, labels)
    }
}

fn log_change(mode: Mode, source: ChangeSource) {
    log::info!("theme: mode={mode} source={source}");
}
