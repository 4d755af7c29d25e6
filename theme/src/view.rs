//! Presentation model for the theme toggle.
//!
//! DESIGN
//! ======
//! A rendering collaborator only ever sees the resolver through its two read
//! operations. Everything the DOM layer writes (root attribute, icon, labels,
//! indicator) is derived here so it can be tested without a browser.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::Deserialize;

use crate::Mode;
use crate::resolver::ThemePreferenceResolver;

/// User-facing strings and icon classes for the toggle control.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeLabels {
    /// Icon shown while dark (clicking goes to light).
    pub to_light_icon: String,
    /// Icon shown while light (clicking goes to dark).
    pub to_dark_icon: String,
    pub to_light_label: String,
    pub to_dark_label: String,
    /// Tooltip while the system signal drives the mode.
    pub following_title: String,
    /// Tooltip while a manual choice is pinned.
    pub manual_title: String,
}

impl Default for ThemeLabels {
    fn default() -> Self {
        Self {
            to_light_icon: "fas fa-sun".to_owned(),
            to_dark_icon: "fas fa-moon".to_owned(),
            to_light_label: "Cambiar a tema claro".to_owned(),
            to_dark_label: "Cambiar a tema oscuro".to_owned(),
            following_title: "Siguiendo tema del sistema | Click: cambiar tema | Doble click: seguir sistema"
                .to_owned(),
            manual_title: "Tema manual | Click: cambiar tema | Doble click: seguir sistema".to_owned(),
        }
    }
}

/// Everything a renderer needs to reflect the current theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeView<'a> {
    pub mode: Mode,
    pub following_system: bool,
    /// Value for the root theme attribute; `None` means remove it so CSS
    /// `prefers-color-scheme` rules apply.
    pub attribute: Option<Mode>,
    pub icon_class: &'a str,
    pub aria_label: &'a str,
    pub title: &'a str,
}

impl<'a> ThemeView<'a> {
    #[must_use]
    pub fn render(resolver: &ThemePreferenceResolver, labels: &'a ThemeLabels) -> Self {
        let mode = resolver.effective_mode();
        let following_system = resolver.is_following_system();

        let (icon_class, aria_label) = match mode {
            Mode::Dark => (labels.to_light_icon.as_str(), labels.to_light_label.as_str()),
            Mode::Light => (labels.to_dark_icon.as_str(), labels.to_dark_label.as_str()),
        };
        let title = if following_system {
            labels.following_title.as_str()
        } else {
            labels.manual_title.as_str()
        };

        Self {
            mode,
            following_system,
            attribute: (!following_system).then_some(mode),
            icon_class,
            aria_label,
            title,
        }
    }
}
