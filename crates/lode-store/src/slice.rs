//! Line-oriented pagination of document content.
//!
//! Documents can grow far past what a caller wants back in one response, so
//! reads go through a selector: everything, the first N lines, the last N
//! lines, or an offset/limit window. Lines split on `\n`; a trailing newline
//! therefore contributes a final empty line to the total, matching how the
//! selected window is rejoined.

/// Which lines of a document to return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineSelector {
    /// The whole document, verbatim.
    All,
    /// The first N lines.
    Head(usize),
    /// The last N lines.
    Tail(usize),
    /// Up to `limit` lines starting at `offset` (0-based).
    Range {
        /// First line to return, 0-based.
        offset: usize,
        /// Maximum number of lines; `None` means to the end.
        limit: Option<usize>,
    },
}

/// A selected window of a document plus its position in the whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSlice {
    /// The selected lines, rejoined.
    pub content: String,
    /// Line count of the full document.
    pub total_lines: usize,
    /// Lines actually returned.
    pub returned_lines: usize,
    /// Effective offset used, for offset-based selection only.
    pub offset: Option<usize>,
}

/// Apply a selector to full document content.
///
/// An offset at or past the end yields zero returned lines, not an error.
/// [`LineSelector::All`] returns the content byte-for-byte so a plain read
/// round-trips exactly.
#[must_use]
pub fn slice_lines(content: &str, selector: LineSelector) -> LineSlice {
    let lines: Vec<&str> = content.split('\n').collect();
    let total = lines.len();

    match selector {
        LineSelector::All => LineSlice {
            content: content.to_owned(),
            total_lines: total,
            returned_lines: total,
            offset: None,
        },
        LineSelector::Head(n) => {
            let end = n.min(total);
            LineSlice {
                content: lines[..end].join("\n"),
                total_lines: total,
                returned_lines: end,
                offset: None,
            }
        }
        LineSelector::Tail(n) => {
            let start = total.saturating_sub(n);
            LineSlice {
                content: lines[start..].join("\n"),
                total_lines: total,
                returned_lines: total - start,
                offset: None,
            }
        }
        LineSelector::Range { offset, limit } => {
            let start = offset.min(total);
            let end = limit.map_or(total, |l| start.saturating_add(l).min(total));
            LineSlice {
                content: lines[start..end].join("\n"),
                total_lines: total,
                returned_lines: end - start,
                offset: Some(start),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "one\ntwo\nthree\nfour\nfive";

    #[test]
    fn all_returns_content_verbatim() {
        let slice = slice_lines("alpha\nbeta\n", LineSelector::All);
        assert_eq!(slice.content, "alpha\nbeta\n");
        assert_eq!(slice.total_lines, 3);
        assert_eq!(slice.returned_lines, 3);
        assert_eq!(slice.offset, None);
    }

    #[test]
    fn head_takes_first_lines() {
        let slice = slice_lines(DOC, LineSelector::Head(2));
        assert_eq!(slice.content, "one\ntwo");
        assert_eq!(slice.total_lines, 5);
        assert_eq!(slice.returned_lines, 2);
    }

    #[test]
    fn head_larger_than_document_clamps() {
        let slice = slice_lines(DOC, LineSelector::Head(50));
        assert_eq!(slice.content, DOC);
        assert_eq!(slice.returned_lines, 5);
    }

    #[test]
    fn tail_takes_last_lines() {
        let slice = slice_lines(DOC, LineSelector::Tail(2));
        assert_eq!(slice.content, "four\nfive");
        assert_eq!(slice.returned_lines, 2);
        assert_eq!(slice.total_lines, 5);
    }

    #[test]
    fn tail_larger_than_document_clamps() {
        let slice = slice_lines(DOC, LineSelector::Tail(99));
        assert_eq!(slice.content, DOC);
        assert_eq!(slice.returned_lines, 5);
    }

    #[test]
    fn range_selects_window() {
        let slice = slice_lines(DOC, LineSelector::Range { offset: 1, limit: Some(2) });
        assert_eq!(slice.content, "two\nthree");
        assert_eq!(slice.returned_lines, 2);
        assert_eq!(slice.offset, Some(1));
    }

    #[test]
    fn range_limit_clamps_to_remainder() {
        let slice = slice_lines(DOC, LineSelector::Range { offset: 3, limit: Some(10) });
        assert_eq!(slice.content, "four\nfive");
        assert_eq!(slice.returned_lines, 2);
    }

    #[test]
    fn range_offset_past_end_returns_zero_lines() {
        let slice = slice_lines(DOC, LineSelector::Range { offset: 100, limit: Some(5) });
        assert_eq!(slice.content, "");
        assert_eq!(slice.returned_lines, 0);
        assert_eq!(slice.total_lines, 5);
        assert_eq!(slice.offset, Some(5));
    }

    #[test]
    fn range_without_limit_runs_to_end() {
        let slice = slice_lines(DOC, LineSelector::Range { offset: 2, limit: None });
        assert_eq!(slice.content, "three\nfour\nfive");
        assert_eq!(slice.returned_lines, 3);
    }

    #[test]
    fn empty_content_counts_one_line() {
        let slice = slice_lines("", LineSelector::All);
        assert_eq!(slice.total_lines, 1);
        assert_eq!(slice.returned_lines, 1);
        assert_eq!(slice.content, "");
    }

    #[test]
    fn trailing_newline_counts_final_empty_line() {
        let slice = slice_lines("a\nb\n", LineSelector::Head(10));
        assert_eq!(slice.total_lines, 3);
        assert_eq!(slice.content, "a\nb\n");
    }
}
