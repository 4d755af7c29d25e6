//! Page-level configuration for the theme layer.
//!
//! The page may pass a JSON object to `ThemeManager.mount`; any field it
//! omits keeps the default that matches the shipped markup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use theme::ThemeLabels;

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config field `{0}` must not be empty")]
    Empty(&'static str),
    #[error("unknown log level: {0:?}")]
    LogLevel(String),
}

/// Element ids, storage key, and labels used by the theme binding.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    pub color_scheme_query: String,
    /// Attribute set on `<html>` while a manual choice is active.
    pub theme_attribute: String,
    pub toggle_id: String,
    pub indicator_id: String,
    /// Class added to the indicator while following the system.
    pub indicator_class: String,
    pub log_level: String,
    pub labels: ThemeLabels,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            color_scheme_query: "(prefers-color-scheme: dark)".to_owned(),
            theme_attribute: "data-theme".to_owned(),
            toggle_id: "theme-toggle".to_owned(),
            indicator_id: "theme-indicator".to_owned(),
            indicator_class: "system-theme".to_owned(),
            log_level: "info".to_owned(),
            labels: ThemeLabels::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or unknown fields,
    /// [`ConfigError::Empty`] for a blank identifier, and
    /// [`ConfigError::LogLevel`] for an unrecognized level.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check identifiers and log level.
    ///
    /// # Errors
    ///
    /// See [`SiteConfig::from_json`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("color_scheme_query", &self.color_scheme_query),
            ("theme_attribute", &self.theme_attribute),
            ("toggle_id", &self.toggle_id),
            ("indicator_id", &self.indicator_id),
            ("indicator_class", &self.indicator_class),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Empty(name));
        }
        self.level_filter()?;
        Ok(())
    }

    /// The configured log level as a filter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] if `log_level` is not a `log` level name.
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
