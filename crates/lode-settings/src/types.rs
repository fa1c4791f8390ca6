//! Settings types and compiled defaults.

use serde::{Deserialize, Serialize};

use crate::errors::SettingsError;

/// Top-level settings for the vault server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LodeSettings {
    /// Vault storage settings.
    pub vault: VaultSettings,
    /// Logging settings.
    pub log: LogSettings,
}

/// Where and how the vault stores documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VaultSettings {
    /// Absolute root directory all entities live under. Required; there is
    /// no usable default.
    pub root_dir: String,
    /// Journal size at which rotation triggers, in bytes.
    pub journal_max_bytes: u64,
    /// Below this size the session document counts as header-only and is
    /// not archived by consolidation.
    pub session_min_bytes: u64,
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            root_dir: String::new(),
            journal_max_bytes: 100 * 1024,
            session_min_bytes: 128,
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogSettings {
    /// Default tracing filter, e.g. `info` or `lode=debug`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "info".into() }
    }
}

impl LodeSettings {
    /// Check the loaded settings are usable. The vault root is the one
    /// hard requirement: unset, empty, or relative roots are fatal.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.vault.root_dir.trim().is_empty() {
            return Err(SettingsError::Invalid {
                message: "vault.rootDir is required (set it in settings.json or LODE_ROOT)".into(),
            });
        }
        if !std::path::Path::new(&self.vault.root_dir).is_absolute() {
            return Err(SettingsError::Invalid {
                message: format!("vault.rootDir must be absolute, got: {}", self.vault.root_dir),
            });
        }
        if self.vault.journal_max_bytes == 0 {
            return Err(SettingsError::Invalid {
                message: "vault.journalMaxBytes must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
