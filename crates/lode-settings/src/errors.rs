//! Settings error types.

use thiserror::Error;

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON or does not match the schema.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// The loaded settings are unusable.
    #[error("invalid settings: {message}")]
    Invalid {
        /// What is wrong with the configuration.
        message: String,
    },
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, SettingsError>;
