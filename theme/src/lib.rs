//! Light/dark theme resolution for the portfolio page.
//!
//! This crate is pure logic with no browser dependencies. It decides which
//! color scheme the page should render from a persisted user choice and the
//! operating system's live `prefers-color-scheme` signal. The host layer owns
//! storage and DOM updates; it feeds inputs in and reads the effective mode
//! back out after every mutation.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`resolver`] | The preference state machine, [`resolver::ThemePreferenceResolver`] |
//! | [`view`] | Presentation model derived from the resolver's read operations |

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod resolver;
pub mod view;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use resolver::ThemePreferenceResolver;
pub use view::{ThemeLabels, ThemeView};

/// Error returned when a string is not `"light"` or `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme value: {0:?}")]
pub struct ParseModeError(pub String);

/// The theme actually rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// The persisted and attribute string for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Mode implied by a "prefers dark" signal.
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    /// Exact match only; the store only ever writes these two literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

/// The user's explicit choice, as persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Preference {
    /// No explicit choice; the system signal drives the mode.
    #[default]
    Unset,
    Light,
    Dark,
}

impl Preference {
    /// Map a raw stored value to a preference. Absent or unrecognized input is `Unset`.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored.map(str::parse::<Mode>) {
            Some(Ok(mode)) => Self::from(mode),
            _ => Self::Unset,
        }
    }

    /// The explicit mode, if any.
    #[must_use]
    pub fn mode(self) -> Option<Mode> {
        match self {
            Self::Unset => None,
            Self::Light => Some(Mode::Light),
            Self::Dark => Some(Mode::Dark),
        }
    }
}

impl From<Mode> for Preference {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Light => Self::Light,
            Mode::Dark => Self::Dark,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode() {
            Some(mode) => mode.fmt(f),
            None => f.write_str("unset"),
        }
    }
}
