//! Persistence seam for the explicit theme choice.
//!
//! A store holds at most one value: the literal `"light"` or `"dark"`. An
//! empty store means the page follows the system.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use theme::Mode;

/// Error returned by [`PreferenceStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No backing storage (e.g. `localStorage` disabled).
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("failed to read preference: {0}")]
    Read(String),
    #[error("failed to write preference: {0}")]
    Write(String),
}

/// Key-value persistence for the user's explicit theme choice.
pub trait PreferenceStore {
    /// The raw stored value, unparsed. Interpretation belongs to the resolver.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be written.
    fn save(&mut self, mode: Mode) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be removed.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// In-process store. Used when browser storage is unavailable and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a raw value, which need not be a valid mode.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self { value: Some(value.into()), read_only: false }
    }

    /// Reject every write, as a full or locked-down storage would.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, mode: Mode) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Write("store is read-only".to_owned()));
        }
        self.value = Some(mode.as_str().to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Write("store is read-only".to_owned()));
        }
        self.value = None;
        Ok(())
    }
}
