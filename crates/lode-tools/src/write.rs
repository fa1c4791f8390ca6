//! `WriteEntity` tool — creates or overwrites a document.
//!
//! Intermediate directories are created as needed; overwriting is not an
//! error. Content is opaque text, no schema is enforced.

use std::sync::Arc;

use async_trait::async_trait;
use lode_core::{
    LodeToolResult, Tool, ToolCategory, ToolParameterSchema, ToolResultBody, error_result,
};
use lode_store::DocumentStore;
use serde_json::{Value, json};

use crate::errors::ToolError;
use crate::traits::{LodeTool, ToolContext};
use crate::validation::{validate_required_string, vault_error_result};

/// The `WriteEntity` tool writes a document wholesale.
pub struct WriteEntityTool {
    store: Arc<DocumentStore>,
}

impl WriteEntityTool {
    /// Create a new `WriteEntity` tool over the given store.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LodeTool for WriteEntityTool {
    fn name(&self) -> &str {
        "WriteEntity"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Documents
    }

    fn definition(&self) -> Tool {
        Tool {
            name: "WriteEntity".into(),
            description: "Write a document into the vault, replacing any existing content.".into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "path".into(),
                        json!({"type": "string", "description": "Logical entity path, e.g. projects/atlas"}),
                    );
                    let _ = m.insert(
                        "content".into(),
                        json!({"type": "string", "description": "Full document content"}),
                    );
                    m
                }),
                required: Some(vec!["path".into(), "content".into()]),
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
        let content = match params.get("content") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => {
                return Ok(error_result("Missing required parameter: content (full document content)"));
            }
            _ => {
                return Ok(error_result("Invalid type for parameter: content (expected string)"));
            }
        };

        if let Err(e) = self.store.write(&path, &content).await {
            return Ok(vault_error_result(&e, &format!("writing {path}")));
        }

        Ok(LodeToolResult {
            content: ToolResultBody::Text(format!("Wrote {} bytes to {path}", content.len())),
            details: Some(json!({"success": true, "path": path})),
            is_error: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lode_store::LocalStorage;
    use tempfile::TempDir;

    fn setup(dir: &TempDir) -> (Arc<DocumentStore>, WriteEntityTool) {
        let store = Arc::new(DocumentStore::new(dir.path(), Arc::new(LocalStorage)));
        let tool = WriteEntityTool::new(Arc::clone(&store));
        (store, tool)
    }

    fn ctx() -> ToolContext {
        ToolContext::new("call-1", "sess-1")
    }

    #[tokio::test]
    async fn writes_new_entity() {
        let dir = TempDir::new().unwrap();
        let (store, tool) = setup(&dir);

        let r = tool
            .execute(json!({"path": "people/jane", "content": "# Jane\n"}), &ctx())
            .await
            .unwrap();

        assert!(r.is_error.is_none());
        assert_eq!(r.details.unwrap()["path"], "people/jane");
        assert_eq!(store.read("people/jane").await.unwrap(), "# Jane\n");
    }

    #[tokio::test]
    async fn overwrites_existing_entity() {
        let dir = TempDir::new().unwrap();
        let (store, tool) = setup(&dir);
        store.write("note", "old").await.unwrap();

        let r = tool.execute(json!({"path": "note", "content": "new"}), &ctx()).await.unwrap();

        assert!(r.is_error.is_none());
        assert_eq!(store.read("note").await.unwrap(), "new");
    }

    #[tokio::test]
    async fn empty_content_is_valid() {
        let dir = TempDir::new().unwrap();
        let (store, tool) = setup(&dir);

        let r = tool.execute(json!({"path": "blank", "content": ""}), &ctx()).await.unwrap();

        assert!(r.is_error.is_none());
        assert_eq!(store.read("blank").await.unwrap(), "");
    }

    #[tokio::test]
    async fn traversal_path_rejected_without_mutation() {
        let dir = TempDir::new().unwrap();
        let (_store, tool) = setup(&dir);

        let r = tool
            .execute(json!({"path": "../outside", "content": "x"}), &ctx())
            .await
            .unwrap();

        assert_eq!(r.is_error, Some(true));
        assert!(!dir.path().parent().unwrap().join("outside.md").exists());
    }

    #[tokio::test]
    async fn missing_content_is_error_result() {
        let dir = TempDir::new().unwrap();
        let (_store, tool) = setup(&dir);
        let r = tool.execute(json!({"path": "x"}), &ctx()).await.unwrap();
        assert_eq!(r.is_error, Some(true));
    }

    #[tokio::test]
    async fn non_string_content_is_error_result() {
        let dir = TempDir::new().unwrap();
        let (_store, tool) = setup(&dir);
        let r = tool.execute(json!({"path": "x", "content": 7}), &ctx()).await.unwrap();
        assert_eq!(r.is_error, Some(true));
    }
}
