//! `ReadEntity` tool — reads a document with optional line pagination.
//!
//! Supports offset/limit windows and head/tail shortcuts. A read without a
//! selector returns the stored content verbatim.

use std::sync::Arc;

use async_trait::async_trait;
use lode_core::{
    LodeToolResult, Tool, ToolCategory, ToolParameterSchema, ToolResultBody, error_result,
};
use lode_store::{DocumentStore, LineSelector, slice_lines};
use serde_json::{Value, json};

use crate::errors::ToolError;
use crate::traits::{LodeTool, ToolContext};
use crate::validation::{get_optional_u64, validate_required_string, vault_error_result};

/// The `ReadEntity` tool reads a document from the vault.
pub struct ReadEntityTool {
    store: Arc<DocumentStore>,
}

impl ReadEntityTool {
    /// Create a new `ReadEntity` tool over the given store.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}

/// Pick the selector from the caller's parameters, rejecting mixed styles.
#[allow(clippy::cast_possible_truncation)]
fn selector_from_params(params: &Value) -> Result<LineSelector, LodeToolResult> {
    let head = get_optional_u64(params, "head");
    let tail = get_optional_u64(params, "tail");
    let offset = get_optional_u64(params, "offset");
    let limit = get_optional_u64(params, "limit");

    let window_styles =
        usize::from(head.is_some()) + usize::from(tail.is_some()) + usize::from(offset.is_some() || limit.is_some());
    if window_styles > 1 {
        return Err(error_result(
            "Choose one selection style: head, tail, or offset/limit",
        ));
    }

    Ok(if let Some(n) = head {
        LineSelector::Head(n as usize)
    } else if let Some(n) = tail {
        LineSelector::Tail(n as usize)
    } else if offset.is_some() || limit.is_some() {
        LineSelector::Range {
            offset: offset.unwrap_or(0) as usize,
            limit: limit.map(|l| l as usize),
        }
    } else {
        LineSelector::All
    })
}

#[async_trait]
impl LodeTool for ReadEntityTool {
    fn name(&self) -> &str {
        "ReadEntity"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Documents
    }

    fn definition(&self) -> Tool {
        Tool {
            name: "ReadEntity".into(),
            description: "Read a document from the vault, optionally paginated by lines.".into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "path".into(),
                        json!({"type": "string", "description": "Logical entity path, e.g. people/jane"}),
                    );
                    let _ = m.insert(
                        "offset".into(),
                        json!({"type": "number", "description": "Line number to start from (0-indexed)"}),
                    );
                    let _ = m.insert(
                        "limit".into(),
                        json!({"type": "number", "description": "Maximum number of lines to return"}),
                    );
                    let _ = m.insert(
                        "head".into(),
                        json!({"type": "number", "description": "Return only the first N lines"}),
                    );
                    let _ = m.insert(
                        "tail".into(),
                        json!({"type": "number", "description": "Return only the last N lines"}),
                    );
                    m
                }),
                required: Some(vec!["path".into()]),
                description: None,
                extra: serde_json::Map::new(),
            },
        }
    }

    async fn execute(&self, params: Value, _ctx: &ToolContext) -> Result<LodeToolResult, ToolError> {
        let path = match validate_required_string(&params, "path", "logical entity path") {
            Ok(p) => p,
            Err(e) => return Ok(e),
        };
        let selector = match selector_from_params(&params) {
            Ok(s) => s,
            Err(e) => return Ok(e),
        };

        let content = match self.store.read(&path).await {
            Ok(c) => c,
            Err(e) => return Ok(vault_error_result(&e, &format!("reading {path}"))),
        };

        let slice = slice_lines(&content, selector);
        let mut details = json!({
            "path": path,
            "totalLines": slice.total_lines,
            "returnedLines": slice.returned_lines,
        });
        if let Some(offset) = slice.offset {
            details["offset"] = json!(offset);
        }

        Ok(LodeToolResult {
            content: ToolResultBody::Text(slice.content),
            details: Some(details),
            is_error: None,
        })
    }
}
