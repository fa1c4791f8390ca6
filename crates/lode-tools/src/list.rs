//! `ListEntities` tool — enumerates every document under the vault root.
//!
//! Returns logical paths, extension stripped, sorted. The prefix filter is
//! a literal starts-with match, not a glob.

use std::sync::Arc;

use async_trait::async_trait;
use lode_core::{LodeToolResult, Tool, ToolCategory, ToolParameterSchema, ToolResultBody};
use lode_store::DocumentStore;
use serde_json::{Value, json};

use crate::errors::ToolError;
use crate::traits::{LodeTool, ToolContext};
use crate::validation::get_optional_string;

/// The `ListEntities` tool lists logical paths in the vault.
pub struct ListEntitiesTool {
    store: Arc<DocumentStore>,
}

impl ListEntitiesTool {
    /// Create a new `ListEntities` tool over the given store.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LodeTool for ListEntitiesTool {
    fn name(&self) -> &str {
        "ListEntities"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Documents
    }

    fn definition(&self) -> Tool {
        Tool {
            name: "ListEntities".into(),
            description: "List every document in the vault, optionally filtered by a literal path prefix.".into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "filterPrefix".into(),
                        json!({"type": "string", "description": "Only paths starting with this literal prefix"}),
                    );
                    m
                }),
                required: None,
                description: None,
                extra: serde_json::Map::new(),
            },
        }
    }

    async fn execute(&self, params: Value, _ctx: &ToolContext) -> Result<LodeToolResult, ToolError> {
        let prefix = get_optional_string(&params, "filterPrefix");
        let entities = self.store.list(prefix.as_deref()).await;

        Ok(LodeToolResult {
            content: ToolResultBody::Text(entities.join("\n")),
            details: Some(json!({"count": entities.len(), "entities": entities})),
            is_error: None,
        })
    }
}
