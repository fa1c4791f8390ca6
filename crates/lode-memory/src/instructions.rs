//! Section merge engine for the instructions document.
//!
//! The instructions document is a preamble followed by named, dated section
//! blocks separated by `---` delimiters. Updating a section replaces its
//! whole block in place; an unknown section is appended. Matching is by
//! section name only — the date suffix in an existing header is ignored, so
//! one name always maps to at most one block.
//!
//! Block location is an explicit line scan: first matching header, then the
//! nearest following delimiter, next header, or end of document. No regex,
//! so the boundary rule stays deterministic and testable.

use std::sync::Arc;

use lode_core::Clock;
use lode_store::{DocumentStore, VaultError};
use tracing::debug;

use crate::INSTRUCTIONS_PATH;

const PREAMBLE: &str = "# Instructions\n\nOperating guidance accumulated across sessions. Each section below records\nwhat changed and why.\n\n---\n";

/// What the merge did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeAction {
    /// The document did not exist and was created around this section.
    Created,
    /// An existing block for this section was replaced in place.
    Replaced,
    /// No block for this section existed; one was appended.
    Appended,
}

impl MergeAction {
    /// The wire spelling reported to callers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Replaced => "replaced",
            Self::Appended => "appended",
        }
    }
}

/// Section-aware editor over the instructions document.
pub struct InstructionsEditor {
    store: Arc<DocumentStore>,
    clock: Arc<dyn Clock>,
}

impl InstructionsEditor {
    /// Create an editor over the given store and clock.
    pub fn new(store: Arc<DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Merge a section into the document: replace its block when the section
    /// already exists, append otherwise, creating the document (preamble
    /// included) when absent.
    pub async fn apply(
        &self,
        section: &str,
        body: &str,
        rationale: &str,
    ) -> Result<MergeAction, VaultError> {
        let date = self.clock.date_stamp();

        let (updated, action) = match self.store.try_read(INSTRUCTIONS_PATH).await? {
            None => {
                let doc = format!("{PREAMBLE}\n{}", block_text(section, &date, rationale, body));
                (doc, MergeAction::Created)
            }
            Some(current) => merge_section(&current, section, &date, rationale, body),
        };

        self.store.write(INSTRUCTIONS_PATH, &updated).await?;
        debug!(section, action = action.as_str(), "instructions section merged");
        Ok(action)
    }
}

/// A full section block in its fixed shape, trailing delimiter included.
fn block_text(section: &str, date: &str, rationale: &str, body: &str) -> String {
    format!(
        "## {section} (updated {date})\n_Why: {rationale}_\n\n{}\n\n---\n",
        body.trim_end_matches('\n')
    )
}

/// The same block as lines. With `with_delimiter` false the trailing `---`
/// is omitted because the block being replaced already ends at one that
/// stays in place.
fn block_lines(
    section: &str,
    date: &str,
    rationale: &str,
    body: &str,
    with_delimiter: bool,
) -> Vec<String> {
    let mut lines = vec![
        format!("## {section} (updated {date})"),
        format!("_Why: {rationale}_"),
        String::new(),
    ];
    lines.extend(body.trim_end_matches('\n').split('\n').map(ToString::to_string));
    lines.push(String::new());
    if with_delimiter {
        lines.push("---".to_owned());
        lines.push(String::new());
    }
    lines
}

/// The section name in a block header line, date suffix stripped.
fn header_section_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("## ")?;
    let name = rest.find(" (updated ").map_or(rest, |at| &rest[..at]);
    Some(name.trim_end())
}

/// Replace or append `section` inside existing document content.
fn merge_section(
    current: &str,
    section: &str,
    date: &str,
    rationale: &str,
    body: &str,
) -> (String, MergeAction) {
    let lines: Vec<&str> = current.split('\n').collect();
    let Some(header_at) = lines
        .iter()
        .position(|line| header_section_name(line) == Some(section))
    else {
        let mut out = current.trim_end_matches('\n').to_owned();
        out.push_str("\n\n");
        out.push_str(&block_text(section, date, rationale, body));
        return (out, MergeAction::Appended);
    };

    // Scan to the block boundary: nearest delimiter, next header, or EOF.
    let mut end = header_at + 1;
    let mut ends_at_delimiter = false;
    while end < lines.len() {
        if lines[end].trim() == "---" {
            ends_at_delimiter = true;
            break;
        }
        if lines[end].starts_with("## ") {
            break;
        }
        end += 1;
    }

    let mut out: Vec<String> = lines[..header_at].iter().map(ToString::to_string).collect();
    out.extend(block_lines(section, date, rationale, body, !ends_at_delimiter));
    out.extend(lines[end..].iter().map(ToString::to_string));
    (out.join("\n"), MergeAction::Replaced)
}
