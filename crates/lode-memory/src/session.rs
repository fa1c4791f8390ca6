//! Session working-notes log.
//!
//! An append-only document of timestamped, typed, importance-tagged notes
//! accumulated since the last consolidation. Consolidation archives the
//! current content (when there is more than the bare header) and resets the
//! document to a dated template.

use std::fmt;
use std::sync::Arc;

use lode_core::Clock;
use lode_store::{DocumentStore, VaultError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ARCHIVE_PREFIX, SESSION_PATH};

const PREAMBLE: &str = "# Session Notes\n\nWorking notes accumulated since the last consolidation.\n";

/// Kind of note being recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    /// Background or situational context.
    Context,
    /// Something learned.
    Insight,
    /// A decision taken and why.
    Decision,
}

impl NoteType {
    /// Parse from the wire spelling.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "context" => Some(Self::Context),
            "insight" => Some(Self::Insight),
            "decision" => Some(Self::Decision),
            _ => None,
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Context => "context",
            Self::Insight => "insight",
            Self::Decision => "decision",
        })
    }
}

/// How much weight a note carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    /// Worth keeping, low urgency.
    Low,
    /// The default.
    #[default]
    Medium,
    /// Should survive any summarization.
    High,
}

impl Importance {
    /// Parse from the wire spelling.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Append/archive/reset operations over the session document.
pub struct SessionLog {
    store: Arc<DocumentStore>,
    clock: Arc<dyn Clock>,
    /// Below this size the document is treated as header-only and skipped
    /// by archival.
    min_meaningful_bytes: u64,
}

impl SessionLog {
    /// Create a session log over the given store and clock.
    pub fn new(store: Arc<DocumentStore>, clock: Arc<dyn Clock>, min_meaningful_bytes: u64) -> Self {
        Self { store, clock, min_meaningful_bytes }
    }

    /// Append a typed note block, creating the document when absent.
    pub async fn append_note(
        &self,
        note_type: NoteType,
        content: &str,
        importance: Importance,
    ) -> Result<(), VaultError> {
        let block = format!(
            "### [{}] {note_type} (importance: {importance})\n{content}\n",
            self.clock.time_stamp()
        );

        let updated = match self.store.try_read(SESSION_PATH).await? {
            None => format!("{PREAMBLE}\n{block}"),
            Some(mut current) => {
                if !current.ends_with('\n') {
                    current.push('\n');
                }
                current.push('\n');
                current.push_str(&block);
                current
            }
        };
        self.store.write(SESSION_PATH, &updated).await?;
        debug!(%note_type, %importance, "session note appended");
        Ok(())
    }

    /// Archive the current session content as a dated archive document and
    /// return its path. Returns `None` without touching storage when the
    /// document is absent or holds nothing beyond its header.
    pub async fn archive_if_meaningful(&self) -> Result<Option<String>, VaultError> {
        let Some(current) = self.store.try_read(SESSION_PATH).await? else {
            return Ok(None);
        };
        if (current.len() as u64) <= self.min_meaningful_bytes {
            debug!(bytes = current.len(), "session below archival threshold, skipping");
            return Ok(None);
        }

        let archive = format!("{ARCHIVE_PREFIX}/session-{}", self.clock.date_stamp());
        self.store.write(&archive, &current).await?;
        debug!(archive, "session archived");
        Ok(Some(archive))
    }

    /// Replace the session document with the dated reset template, naming
    /// the archive when one was just written.
    pub async fn reset(&self, archived_to: Option<&str>) -> Result<(), VaultError> {
        let mut template = format!(
            "# Session Notes\n\nReset on {}.\n",
            self.clock.date_stamp()
        );
        if let Some(archive) = archived_to {
            template.push_str(&format!("Previous session archived to `{archive}`.\n"));
        }
        self.store.write(SESSION_PATH, &template).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lode_core::FixedClock;
    use lode_store::LocalStorage;
    use tempfile::TempDir;

    fn setup(dir: &TempDir) -> SessionLog {
        let store = Arc::new(DocumentStore::new(dir.path(), Arc::new(LocalStorage)));
        SessionLog::new(store, Arc::new(FixedClock::at("2026-08-06T14:05:09Z")), 128)
    }

    fn read(dir: &TempDir, logical: &str) -> String {
        std::fs::read_to_string(dir.path().join(format!("{logical}.md"))).unwrap()
    }

    #[tokio::test]
    async fn first_note_creates_document_with_header() {
        let dir = TempDir::new().unwrap();
        let log = setup(&dir);

        log.append_note(NoteType::Context, "met the new deploy flow", Importance::Medium)
            .await
            .unwrap();

        let content = read(&dir, "session");
        assert!(content.starts_with("# Session Notes\n"));
        assert!(content.contains("### [14:05:09] context (importance: medium)\nmet the new deploy flow\n"));
    }

    #[tokio::test]
    async fn notes_append_in_order() {
        let dir = TempDir::new().unwrap();
        let log = setup(&dir);

        log.append_note(NoteType::Context, "A", Importance::Medium).await.unwrap();
        log.append_note(NoteType::Insight, "B", Importance::High).await.unwrap();

        let content = read(&dir, "session");
        let a = content.find("context (importance: medium)\nA").unwrap();
        let b = content.find("insight (importance: high)\nB").unwrap();
        assert!(a < b, "notes should appear in append order");
    }

    #[tokio::test]
    async fn archive_absent_session_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(setup(&dir).archive_if_meaningful().await.unwrap(), None);
    }

    #[tokio::test]
    async fn archive_header_only_session_is_skipped() {
        let dir = TempDir::new().unwrap();
        let log = setup(&dir);
        log.reset(None).await.unwrap();

        assert_eq!(log.archive_if_meaningful().await.unwrap(), None);
    }

    #[tokio::test]
    async fn archive_meaningful_session_copies_content() {
        let dir = TempDir::new().unwrap();
        let log = setup(&dir);
        log.append_note(NoteType::Decision, "switched storage layout to dated archives", Importance::High)
            .await
            .unwrap();

        let archive = log.archive_if_meaningful().await.unwrap().unwrap();
        assert_eq!(archive, "archives/session-2026-08-06");
        assert_eq!(read(&dir, &archive), read(&dir, "session"));
    }

    #[tokio::test]
    async fn reset_replaces_all_prior_text() {
        let dir = TempDir::new().unwrap();
        let log = setup(&dir);
        log.append_note(NoteType::Context, "old note", Importance::Low).await.unwrap();

        log.reset(Some("archives/session-2026-08-06")).await.unwrap();

        let content = read(&dir, "session");
        assert!(!content.contains("old note"));
        assert!(content.contains("Reset on 2026-08-06."));
        assert!(content.contains("Previous session archived to `archives/session-2026-08-06`."));
    }

    #[tokio::test]
    async fn reset_without_archive_omits_pointer() {
        let dir = TempDir::new().unwrap();
        let log = setup(&dir);

        log.reset(None).await.unwrap();

        assert!(!read(&dir, "session").contains("archived to"));
    }

    #[test]
    fn note_type_parse_and_display() {
        assert_eq!(NoteType::parse("insight"), Some(NoteType::Insight));
        assert_eq!(NoteType::parse("INSIGHT"), None);
        assert_eq!(NoteType::Decision.to_string(), "decision");
    }

    #[test]
    fn importance_defaults_to_medium() {
        assert_eq!(Importance::default(), Importance::Medium);
        assert_eq!(Importance::parse("bogus"), None);
        assert_eq!(Importance::parse("high"), Some(Importance::High));
    }
}
