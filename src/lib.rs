//! # portfolio-site
//!
//! WASM behavior layer for the portfolio page's light/dark theme.
//!
//! The decision logic lives in the `theme` crate. This crate adds what the page
//! needs around it: configuration, a persistence seam over `localStorage`, a
//! session that keeps resolver and store in step, and (behind the `hydrate`
//! feature) the DOM and event wiring.

pub mod config;
pub mod session;
pub mod store;

#[cfg(feature = "hydrate")]
pub mod dom;

pub use config::{ConfigError, SiteConfig};
pub use session::{ChangeSource, ThemeSession};
pub use store::{MemoryStore, PreferenceStore, StoreError};
