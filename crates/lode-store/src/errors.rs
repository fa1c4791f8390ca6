//! Vault error types.
//!
//! The taxonomy the whole system reports through: a path escaping the root,
//! a missing read target, or an underlying storage failure. Absent optional
//! documents are not errors — callers that tolerate absence go through
//! `DocumentStore::try_read` / `try_size` instead.

use std::io;

use thiserror::Error;

/// Errors raised by the document store and everything built on it.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The resolved physical location is outside the vault root.
    #[error("path escapes the vault root: {path}")]
    PathEscape {
        /// The offending logical path.
        path: String,
    },

    /// The entity does not exist.
    #[error("entity not found: {path}")]
    NotFound {
        /// The logical path that was not found.
        path: String,
    },

    /// Underlying read/write/stat/rename failure.
    #[error("storage error: {0}")]
    Storage(#[from] io::Error),
}

impl VaultError {
    /// Map an I/O error for the given logical path, turning `NotFound` into
    /// the vault-level variant so callers never see raw filesystem detail.
    pub(crate) fn from_io(err: io::Error, logical: &str) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path: logical.to_owned() }
        } else {
            Self::Storage(err)
        }
    }
}
