//! # lode-settings
//!
//! Settings for the Lode vault server.
//!
//! Loading flow:
//! 1. Start with compiled [`LodeSettings::default()`]
//! 2. If the settings file exists, deep-merge user values over defaults
//! 3. Apply environment variable overrides (highest priority)
//!
//! The one required value is the vault root directory: validation fails when
//! it is unset, empty, or not absolute, and the server exits at startup
//! rather than running unconfined.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::SettingsError;
pub use loader::{load_settings, load_settings_from_path, settings_path};
pub use types::{LodeSettings, LogSettings, VaultSettings};
