//! `Reflect` tool — appends a dated reflection block to the journal.
//!
//! Builds the block from key insights plus optional growth/focus paragraphs,
//! cross-references how many context anchors the ledger currently tracks,
//! and appends through the rotation manager so an oversized journal is
//! archived first.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use lode_core::{
    Clock, LodeToolResult, Tool, ToolCategory, ToolParameterSchema, ToolResultBody, error_result,
};
use lode_memory::{Journal, Ledger};
use serde_json::{Value, json};

use crate::errors::ToolError;
use crate::traits::{LodeTool, ToolContext};
use crate::validation::{get_optional_string, validate_required_string, vault_error_result};

/// Scope of a reflection entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReflectionType {
    Daily,
    Session,
    Project,
}

impl ReflectionType {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "session" => Some(Self::Session),
            "project" => Some(Self::Project),
            _ => None,
        }
    }
}

impl fmt::Display for ReflectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Daily => "daily",
            Self::Session => "session",
            Self::Project => "project",
        })
    }
}

/// The `Reflect` tool appends to the rotating journal.
pub struct ReflectTool {
    journal: Arc<Journal>,
    ledger: Arc<Ledger>,
    clock: Arc<dyn Clock>,
}

impl ReflectTool {
    /// Create a new `Reflect` tool over the journal, ledger, and clock.
    pub fn new(journal: Arc<Journal>, ledger: Arc<Ledger>, clock: Arc<dyn Clock>) -> Self {
        Self { journal, ledger, clock }
    }
}

/// Assemble the reflection block in its fixed shape.
fn build_entry(
    kind: ReflectionType,
    date: &str,
    insights: &[String],
    growth: Option<&str>,
    focus: Option<&str>,
    anchors: usize,
) -> String {
    let mut entry = format!("## Reflection ({kind}) {date}\n");
    if !insights.is_empty() {
        entry.push_str("\nKey insights:\n");
        for insight in insights {
            entry.push_str(&format!("- {insight}\n"));
        }
    }
    if let Some(growth) = growth {
        entry.push_str(&format!("\nCognitive growth:\n{growth}\n"));
    }
    if let Some(focus) = focus {
        entry.push_str(&format!("\nFuture focus:\n{focus}\n"));
    }
    entry.push_str(&format!("\nContext anchors tracked: {anchors}\n"));
    entry
}

#[async_trait]
impl LodeTool for ReflectTool {
    fn name(&self) -> &str {
        "Reflect"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Memory
    }

    fn definition(&self) -> Tool {
        Tool {
            name: "Reflect".into(),
            description: "Append a dated reflection block to the journal, rotating it past the size threshold.".into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "reflectionType".into(),
                        json!({"type": "string", "enum": ["daily", "session", "project"], "description": "Scope of the reflection"}),
                    );
                    let _ = m.insert(
                        "keyInsights".into(),
                        json!({"type": "array", "items": {"type": "string"}, "description": "Insight bullet points"}),
                    );
                    let _ = m.insert(
                        "cognitiveGrowth".into(),
                        json!({"type": "string", "description": "What understanding changed"}),
                    );
                    let _ = m.insert(
                        "futureFocus".into(),
                        json!({"type": "string", "description": "Where to direct attention next"}),
                    );
                    m
                }),
                required: Some(vec!["reflectionType".into(), "keyInsights".into()]),
                description: None,
                extra: serde_json::Map::new(),
            },
        }
    }

    async fn execute(&self, params: Value, _ctx: &ToolContext) -> Result<LodeToolResult, ToolError> {
        let raw_type = match validate_required_string(&params, "reflectionType", "daily, session, or project") {
            Ok(v) => v,
            Err(e) => return Ok(e),
        };
        let Some(kind) = ReflectionType::parse(&raw_type) else {
            return Ok(error_result(format!(
                "Invalid reflectionType: {raw_type} (expected daily, session, or project)"
            )));
        };

        let Some(insights) = params.get("keyInsights").and_then(Value::as_array) else {
            return Ok(error_result(
                "Missing required parameter: keyInsights (array of insight strings)",
            ));
        };
        let insights: Vec<String> = insights
            .iter()
            .filter_map(Value::as_str)
            .map(ToOwned::to_owned)
            .collect();

        let growth = get_optional_string(&params, "cognitiveGrowth");
        let focus = get_optional_string(&params, "futureFocus");

        let anchors = match self.ledger.count_anchors().await {
            Ok(n) => n,
            Err(e) => return Ok(vault_error_result(&e, "counting context anchors")),
        };

        let entry = build_entry(
            kind,
            &self.clock.date_stamp(),
            &insights,
            growth.as_deref(),
            focus.as_deref(),
            anchors,
        );

        let outcome = match self.journal.append(&entry).await {
            Ok(o) => o,
            Err(e) => return Ok(vault_error_result(&e, "appending to the journal")),
        };

        let message = if outcome.rotated {
            format!(
                "Recorded {kind} reflection; journal rotated to {}",
                outcome.archive_path.as_deref().unwrap_or_default()
            )
        } else {
            format!("Recorded {kind} reflection")
        };

        let mut details = json!({
            "success": true,
            "message": message,
            "rotated": outcome.rotated,
        });
        if let Some(archive) = &outcome.archive_path {
            details["archivedTo"] = json!(archive);
        }

        Ok(LodeToolResult {
            content: ToolResultBody::Text(message),
            details: Some(details),
            is_error: None,
        })
    }
}
