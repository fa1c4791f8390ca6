//! Consolidation workflow.
//!
//! Commits a batch of entities, records one ledger batch entry, archives a
//! meaningful session document, and resets it. Step 1 is all-or-nothing for
//! the call: any write failure aborts before the ledger or session are
//! touched. Later steps tolerate absent target documents but propagate hard
//! storage failures. Nothing already committed is rolled back — the
//! filesystem is the authoritative state and partial progress is visible to
//! the next call.

use std::sync::Arc;

use lode_store::{DocumentStore, VaultError};
use tracing::{info, warn};

use crate::ledger::Ledger;
use crate::session::SessionLog;

/// One entity in a consolidation batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntitySpec {
    /// Logical path to write.
    pub path: String,
    /// Full document content.
    pub content: String,
    /// One-line summary recorded in the ledger.
    pub summary: String,
}

/// What a consolidation run did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsolidationReport {
    /// Logical paths written, in input order.
    pub entities_created: Vec<String>,
    /// Whether the session document was archived.
    pub session_archived: bool,
    /// Archive path when the session was archived.
    pub archive_path: Option<String>,
    /// Whether the session document was reset.
    pub session_reset: bool,
    /// Whether the ledger gained a batch entry.
    pub anchors_updated: bool,
}

/// The batch workflow over store, ledger, and session log.
pub struct Consolidator {
    store: Arc<DocumentStore>,
    ledger: Ledger,
    session: SessionLog,
}

impl Consolidator {
    /// Create a consolidator from its collaborators.
    pub fn new(store: Arc<DocumentStore>, ledger: Ledger, session: SessionLog) -> Self {
        Self { store, ledger, session }
    }

    /// Run the workflow over a non-empty batch.
    pub async fn run(&self, batch: &[EntitySpec]) -> Result<ConsolidationReport, VaultError> {
        // Step 1: write every entity. A failure here aborts the whole call
        // before the ledger or session see any mutation.
        let mut written = Vec::with_capacity(batch.len());
        for spec in batch {
            self.store.write(&spec.path, &spec.content).await.inspect_err(|error| {
                warn!(path = spec.path, %error, "consolidation aborted during entity writes");
            })?;
            written.push(spec.path.clone());
        }

        // Step 2: one dated batch entry, newest first.
        let pairs: Vec<(String, String)> =
            batch.iter().map(|s| (s.path.clone(), s.summary.clone())).collect();
        self.ledger.record_batch(&pairs).await?;

        // Steps 3 and 4: archive a meaningful session, then reset it. An
        // absent session skips archival and is simply created by the reset.
        let archive_path = self.session.archive_if_meaningful().await?;
        self.session.reset(archive_path.as_deref()).await?;

        info!(
            entities = written.len(),
            archived = archive_path.is_some(),
            "consolidation complete"
        );
        Ok(ConsolidationReport {
            entities_created: written,
            session_archived: archive_path.is_some(),
            archive_path,
            session_reset: true,
            anchors_updated: true,
        })
    }
}
