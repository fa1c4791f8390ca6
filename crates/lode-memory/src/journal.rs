//! Journal rotation.
//!
//! The journal is append-only and grows without bound, so every append first
//! checks the current size. At or past the threshold the whole document is
//! renamed to a dated archive and a fresh journal starts with a pointer line
//! naming it. A second rotation on the same calendar day overwrites that
//! day's archive — one rotation per day is the expected cadence.

use std::sync::Arc;

use lode_core::Clock;
use lode_store::{DocumentStore, VaultError};
use tracing::{debug, info};

use crate::{ARCHIVE_PREFIX, JOURNAL_PATH};

const PREAMBLE: &str = "# Journal\n\nLong-running reflection log. Rotated past the size threshold.\n";

/// Whether an append rotated the journal, and where the old content went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationOutcome {
    /// True when the append triggered a rotation.
    pub rotated: bool,
    /// Logical path of the archive, when rotated.
    pub archive_path: Option<String>,
}

/// Size-checked append over the journal document.
pub struct Journal {
    store: Arc<DocumentStore>,
    clock: Arc<dyn Clock>,
    max_bytes: u64,
}

impl Journal {
    /// Create a journal over the given store and clock with a rotation
    /// threshold in bytes.
    pub fn new(store: Arc<DocumentStore>, clock: Arc<dyn Clock>, max_bytes: u64) -> Self {
        Self { store, clock, max_bytes }
    }

    /// Append an entry, rotating first when the journal has reached the
    /// threshold. A missing journal is initialized, never rotated.
    pub async fn append(&self, entry: &str) -> Result<RotationOutcome, VaultError> {
        match self.store.try_size(JOURNAL_PATH).await? {
            None => {
                let doc = format!("{PREAMBLE}\n{}\n", entry.trim_end_matches('\n'));
                self.store.write(JOURNAL_PATH, &doc).await?;
                debug!("journal initialized");
                Ok(RotationOutcome { rotated: false, archive_path: None })
            }
            Some(size) if size >= self.max_bytes => {
                let archive = format!("{ARCHIVE_PREFIX}/journal-{}", self.clock.date_stamp());
                self.store.rename(JOURNAL_PATH, &archive).await?;

                let doc = format!(
                    "{PREAMBLE}\nPrevious entries archived to `{archive}`.\n\n{}\n",
                    entry.trim_end_matches('\n')
                );
                self.store.write(JOURNAL_PATH, &doc).await?;
                info!(archive, size, "journal rotated");
                Ok(RotationOutcome { rotated: true, archive_path: Some(archive) })
            }
            Some(_) => {
                let mut current = self.store.read(JOURNAL_PATH).await?;
                if !current.ends_with('\n') {
                    current.push('\n');
                }
                current.push('\n');
                current.push_str(entry.trim_end_matches('\n'));
                current.push('\n');
                self.store.write(JOURNAL_PATH, &current).await?;
                Ok(RotationOutcome { rotated: false, archive_path: None })
            }
        }
    }
}
