//! Cross-reference ledger.
//!
//! Records which entities each consolidation batch produced, newest batch
//! first: every new entry is inserted immediately after the header so older
//! batches sink toward the bottom without being rewritten.

use std::sync::Arc;

use lode_core::Clock;
use lode_store::{DocumentStore, VaultError};
use tracing::debug;

use crate::LEDGER_PATH;

const PREAMBLE: &str = "# Context Anchors\n\nCross-references recorded by each consolidation batch.\n";

/// Batch-entry insertion and anchor counting over the ledger document.
pub struct Ledger {
    store: Arc<DocumentStore>,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    /// Create a ledger over the given store and clock.
    pub fn new(store: Arc<DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Insert one dated batch entry listing every `path: summary` pair in
    /// input order. Creates the ledger with its header when absent.
    pub async fn record_batch(&self, entries: &[(String, String)]) -> Result<(), VaultError> {
        let mut block = format!("## Batch {}\n", self.clock.date_stamp());
        for (path, summary) in entries {
            block.push_str(&format!("- `{path}`: {summary}\n"));
        }

        let updated = match self.store.try_read(LEDGER_PATH).await? {
            None => format!("{PREAMBLE}\n{block}"),
            Some(current) => insert_after_header(&current, &block),
        };
        self.store.write(LEDGER_PATH, &updated).await?;
        debug!(anchors = entries.len(), "ledger batch recorded");
        Ok(())
    }

    /// Number of anchor lines across all batches. An absent ledger counts
    /// zero, it is not an error.
    pub async fn count_anchors(&self) -> Result<usize, VaultError> {
        let Some(content) = self.store.try_read(LEDGER_PATH).await? else {
            return Ok(0);
        };
        Ok(content.lines().filter(|line| line.starts_with("- ")).count())
    }
}

/// Splice a batch block in directly after the header: before the first
/// existing `## ` line, or at the end when no batch exists yet.
fn insert_after_header(current: &str, block: &str) -> String {
    let lines: Vec<&str> = current.split('\n').collect();
    let insert_at = lines.iter().position(|line| line.starts_with("## "));

    match insert_at {
        Some(index) => {
            let mut out: Vec<String> = lines[..index].iter().map(ToString::to_string).collect();
            out.extend(block.trim_end_matches('\n').split('\n').map(ToString::to_string));
            out.push(String::new());
            out.extend(lines[index..].iter().map(ToString::to_string));
            out.join("\n")
        }
        None => {
            let mut out = current.to_owned();
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
            out.push_str(block);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lode_core::FixedClock;
    use lode_store::LocalStorage;
    use tempfile::TempDir;

    fn setup(dir: &TempDir) -> Ledger {
        let store = Arc::new(DocumentStore::new(dir.path(), Arc::new(LocalStorage)));
        Ledger::new(store, Arc::new(FixedClock::at("2026-08-06T09:00:00Z")))
    }

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries.iter().map(|(p, s)| ((*p).to_owned(), (*s).to_owned())).collect()
    }

    fn read(dir: &TempDir) -> String {
        std::fs::read_to_string(dir.path().join("context-anchors.md")).unwrap()
    }

    #[tokio::test]
    async fn first_batch_creates_ledger_with_header() {
        let dir = TempDir::new().unwrap();
        let ledger = setup(&dir);

        ledger
            .record_batch(&pairs(&[("people/jane", "infra lead"), ("projects/atlas", "Q3 migration")]))
            .await
            .unwrap();

        let content = read(&dir);
        assert!(content.starts_with("# Context Anchors\n"));
        assert!(content.contains("## Batch 2026-08-06\n"));
        assert!(content.contains("- `people/jane`: infra lead\n"));
        assert!(content.contains("- `projects/atlas`: Q3 migration\n"));
    }

    #[tokio::test]
    async fn new_batch_lands_above_older_batches() {
        let dir = TempDir::new().unwrap();
        let ledger = setup(&dir);

        ledger.record_batch(&pairs(&[("old/entity", "first batch")])).await.unwrap();
        ledger.record_batch(&pairs(&[("new/entity", "second batch")])).await.unwrap();

        let content = read(&dir);
        let newer = content.find("new/entity").unwrap();
        let older = content.find("old/entity").unwrap();
        assert!(newer < older, "newest batch should be inserted after the header");
        // Header still on top.
        assert!(content.starts_with("# Context Anchors\n"));
    }

    #[tokio::test]
    async fn anchors_preserved_across_batches() {
        let dir = TempDir::new().unwrap();
        let ledger = setup(&dir);

        ledger.record_batch(&pairs(&[("a/one", "one")])).await.unwrap();
        ledger.record_batch(&pairs(&[("b/two", "two")])).await.unwrap();

        let content = read(&dir);
        assert!(content.contains("- `a/one`: one\n"));
        assert!(content.contains("- `b/two`: two\n"));
    }

    #[tokio::test]
    async fn count_anchors_absent_ledger_is_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(setup(&dir).count_anchors().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn count_anchors_sums_all_batches() {
        let dir = TempDir::new().unwrap();
        let ledger = setup(&dir);

        ledger.record_batch(&pairs(&[("a/x", "x"), ("a/y", "y")])).await.unwrap();
        ledger.record_batch(&pairs(&[("b/z", "z")])).await.unwrap();

        assert_eq!(ledger.count_anchors().await.unwrap(), 3);
    }

    #[test]
    fn insert_after_header_without_existing_batches_appends() {
        let current = "# Context Anchors\n\nintro\n";
        let merged = insert_after_header(current, "## Batch 2026-08-06\n- `x`: y\n");
        assert!(merged.starts_with("# Context Anchors\n\nintro\n"));
        assert!(merged.ends_with("- `x`: y\n"));
    }
}
