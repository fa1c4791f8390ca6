//! `UpdateInstructions` tool — merges a section into the instructions
//! document.

use std::sync::Arc;

use async_trait::async_trait;
use lode_core::{LodeToolResult, Tool, ToolCategory, ToolParameterSchema, ToolResultBody};
use lode_memory::InstructionsEditor;
use serde_json::{Value, json};

use crate::errors::ToolError;
use crate::traits::{LodeTool, ToolContext};
use crate::validation::{get_optional_string, validate_required_string, vault_error_result};

const DEFAULT_SECTION: &str = "Behavioral Learnings";

/// The `UpdateInstructions` tool runs the section merge engine.
pub struct UpdateInstructionsTool {
    editor: Arc<InstructionsEditor>,
}

impl UpdateInstructionsTool {
    /// Create a new `UpdateInstructions` tool over the given editor.
    pub fn new(editor: Arc<InstructionsEditor>) -> Self {
        Self { editor }
    }
}

#[async_trait]
impl LodeTool for UpdateInstructionsTool {
    fn name(&self) -> &str {
        "UpdateInstructions"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Memory
    }

    fn definition(&self) -> Tool {
        Tool {
            name: "UpdateInstructions".into(),
            description: "Replace or append a named, dated section of the instructions document.".into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "section".into(),
                        json!({"type": "string", "description": "Section name (default Behavioral Learnings)"}),
                    );
                    let _ = m.insert(
                        "content".into(),
                        json!({"type": "string", "description": "New section body"}),
                    );
                    let _ = m.insert(
                        "rationale".into(),
                        json!({"type": "string", "description": "Why this guidance changed"}),
                    );
                    m
                }),
                required: Some(vec!["content".into(), "rationale".into()]),
                description: None,
                extra: serde_json::Map::new(),
            },
        }
    }

    async fn execute(&self, params: Value, _ctx: &ToolContext) -> Result<LodeToolResult, ToolError> {
        let section =
            get_optional_string(&params, "section").unwrap_or_else(|| DEFAULT_SECTION.to_owned());
        let content = match validate_required_string(&params, "content", "new section body") {
            Ok(v) => v,
            Err(e) => return Ok(e),
        };
        let rationale = match validate_required_string(&params, "rationale", "why this guidance changed") {
            Ok(v) => v,
            Err(e) => return Ok(e),
        };

        let action = match self.editor.apply(&section, &content, &rationale).await {
            Ok(a) => a,
            Err(e) => return Ok(vault_error_result(&e, "updating the instructions document")),
        };

        let message = format!("Section '{section}' {}", action.as_str());
        Ok(LodeToolResult {
            content: ToolResultBody::Text(message.clone()),
            details: Some(json!({
                "success": true,
                "message": message,
                "sectionUpdated": section,
                "action": action.as_str(),
            })),
            is_error: None,
        })
    }
}
