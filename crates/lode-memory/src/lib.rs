//! # lode-memory
//!
//! The structural-editing engines built on the document store:
//!
//! - [`session`] — append-only working-notes log, reset by consolidation
//! - [`ledger`] — cross-reference anchors recorded per consolidation batch
//! - [`instructions`] — section-aware merge/replace editing of the
//!   instructions document
//! - [`journal`] — size-triggered rotation of the reflection journal
//! - [`consolidate`] — the batch workflow committing entities, updating the
//!   ledger, and archiving + resetting the session
//!
//! Every engine re-reads from storage on each call; the filesystem is the
//! authoritative state. Absent optional documents (session, ledger, journal,
//! instructions) are normal — each engine starts from its fresh default —
//! while a hard storage failure always propagates.

#![deny(unsafe_code)]

pub mod consolidate;
pub mod instructions;
pub mod journal;
pub mod ledger;
pub mod session;

pub use consolidate::{ConsolidationReport, Consolidator, EntitySpec};
pub use instructions::{InstructionsEditor, MergeAction};
pub use journal::{Journal, RotationOutcome};
pub use ledger::Ledger;
pub use session::{Importance, NoteType, SessionLog};

/// Logical path of the session working-notes document.
pub const SESSION_PATH: &str = "session";

/// Logical path of the cross-reference ledger document.
pub const LEDGER_PATH: &str = "context-anchors";

/// Logical path of the rotating journal document.
pub const JOURNAL_PATH: &str = "journal";

/// Logical path of the instructions document.
pub const INSTRUCTIONS_PATH: &str = "instructions";

/// Logical prefix dated archive documents are filed under.
pub const ARCHIVE_PREFIX: &str = "archives";
