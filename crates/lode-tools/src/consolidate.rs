//! `Consolidate` tool — commits a batch of entities and resets the session.
//!
//! Thin adapter over the consolidation workflow: parse the batch, run it,
//! report what happened.

use std::sync::Arc;

use async_trait::async_trait;
use lode_core::{
    LodeToolResult, Tool, ToolCategory, ToolParameterSchema, ToolResultBody, error_result,
};
use lode_memory::{Consolidator, EntitySpec};
use serde_json::{Value, json};

use crate::errors::ToolError;
use crate::traits::{LodeTool, ToolContext};
use crate::validation::vault_error_result;

/// The `Consolidate` tool runs the batch consolidation workflow.
pub struct ConsolidateTool {
    consolidator: Arc<Consolidator>,
}

impl ConsolidateTool {
    /// Create a new `Consolidate` tool over the given workflow.
    pub fn new(consolidator: Arc<Consolidator>) -> Self {
        Self { consolidator }
    }
}

/// Parse the `entities` array into specs, or explain what is malformed.
fn parse_batch(params: &Value) -> Result<Vec<EntitySpec>, String> {
    let Some(raw) = params.get("entities").and_then(Value::as_array) else {
        return Err("Missing required parameter: entities (array of {path, content, summary})".into());
    };
    if raw.is_empty() {
        return Err("entities must contain at least one {path, content, summary} triple".into());
    }

    let mut batch = Vec::with_capacity(raw.len());
    for (index, item) in raw.iter().enumerate() {
        let field = |name: &str| -> Result<String, String> {
            item.get(name)
                .and_then(Value::as_str)
                .map(ToOwned::to_owned)
                .ok_or_else(|| format!("entities[{index}] is missing string field: {name}"))
        };
        batch.push(EntitySpec {
            path: field("path")?,
            content: field("content")?,
            summary: field("summary")?,
        });
    }
    Ok(batch)
}

#[async_trait]
impl LodeTool for ConsolidateTool {
    fn name(&self) -> &str {
        "Consolidate"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Workflow
    }

    fn definition(&self) -> Tool {
        Tool {
            name: "Consolidate".into(),
            description: "Write a batch of entities, record them in the ledger, and archive + reset the session document.".into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "entities".into(),
                        json!({
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "path": {"type": "string", "description": "Logical entity path"},
                                    "content": {"type": "string", "description": "Full document content"},
                                    "summary": {"type": "string", "description": "One-line summary for the ledger"}
                                },
                                "required": ["path", "content", "summary"]
                            },
                            "description": "Entities to commit, in order"
                        }),
                    );
                    m
                }),
                required: Some(vec!["entities".into()]),
                description: None,
                extra: serde_json::Map::new(),
            },
        }
    }

    async fn execute(&self, params: Value, _ctx: &ToolContext) -> Result<LodeToolResult, ToolError> {
        let batch = match parse_batch(&params) {
            Ok(b) => b,
            Err(message) => return Ok(error_result(message)),
        };

        let report = match self.consolidator.run(&batch).await {
            Ok(r) => r,
            Err(e) => return Ok(vault_error_result(&e, "consolidating the batch")),
        };

        let message = format!(
            "Consolidated {} entities{}",
            report.entities_created.len(),
            report
                .archive_path
                .as_deref()
                .map(|a| format!("; session archived to {a}"))
                .unwrap_or_default()
        );

        let mut details = json!({
            "success": true,
            "message": message,
            "entitiesCreated": report.entities_created,
            "sessionReset": report.session_reset,
            "sessionArchived": report.session_archived,
            "contextAnchorsUpdated": report.anchors_updated,
        });
        if let Some(archive) = &report.archive_path {
            details["archivePath"] = json!(archive);
        }

        Ok(LodeToolResult {
            content: ToolResultBody::Text(message),
            details: Some(details),
            is_error: None,
        })
    }
}
