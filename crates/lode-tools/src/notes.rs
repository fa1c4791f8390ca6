//! `AddNote` tool — appends a typed note to the session document.

use std::sync::Arc;

use async_trait::async_trait;
use lode_core::{
    LodeToolResult, Tool, ToolCategory, ToolParameterSchema, ToolResultBody, error_result,
};
use lode_memory::{Importance, NoteType, SessionLog};
use serde_json::{Value, json};

use crate::errors::ToolError;
use crate::traits::{LodeTool, ToolContext};
use crate::validation::{get_optional_string, validate_required_string, vault_error_result};

/// The `AddNote` tool appends to the session working-notes document.
pub struct AddNoteTool {
    session: Arc<SessionLog>,
}

impl AddNoteTool {
    /// Create a new `AddNote` tool over the given session log.
    pub fn new(session: Arc<SessionLog>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl LodeTool for AddNoteTool {
    fn name(&self) -> &str {
        "AddNote"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Memory
    }

    fn definition(&self) -> Tool {
        Tool {
            name: "AddNote".into(),
            description: "Append a dated, typed, importance-tagged note to the session document.".into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "noteType".into(),
                        json!({"type": "string", "enum": ["context", "insight", "decision"], "description": "Kind of note"}),
                    );
                    let _ = m.insert(
                        "content".into(),
                        json!({"type": "string", "description": "The note text"}),
                    );
                    let _ = m.insert(
                        "importance".into(),
                        json!({"type": "string", "enum": ["low", "medium", "high"], "description": "Weight of the note (default medium)"}),
                    );
                    m
                }),
                required: Some(vec!["noteType".into(), "content".into()]),
                description: None,
                extra: serde_json::Map::new(),
            },
        }
    }

    async fn execute(&self, params: Value, _ctx: &ToolContext) -> Result<LodeToolResult, ToolError> {
        let raw_type = match validate_required_string(&params, "noteType", "context, insight, or decision") {
            Ok(v) => v,
            Err(e) => return Ok(e),
        };
        let Some(note_type) = NoteType::parse(&raw_type) else {
            return Ok(error_result(format!(
                "Invalid noteType: {raw_type} (expected context, insight, or decision)"
            )));
        };

        let content = match validate_required_string(&params, "content", "the note text") {
            Ok(v) => v,
            Err(e) => return Ok(e),
        };

        let importance = match get_optional_string(&params, "importance") {
            None => Importance::default(),
            Some(raw) => match Importance::parse(&raw) {
                Some(level) => level,
                None => {
                    return Ok(error_result(format!(
                        "Invalid importance: {raw} (expected low, medium, or high)"
                    )));
                }
            },
        };

        if let Err(e) = self.session.append_note(note_type, &content, importance).await {
            return Ok(vault_error_result(&e, "appending a session note"));
        }

        let message = format!("Recorded {note_type} note ({importance})");
        Ok(LodeToolResult {
            content: ToolResultBody::Text(message.clone()),
            details: Some(json!({"success": true, "message": message})),
            is_error: None,
        })
    }
}
