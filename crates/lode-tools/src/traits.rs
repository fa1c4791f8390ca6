//! Core trait for the tool system.
//!
//! Defines [`LodeTool`] — the trait every vault tool implements — and the
//! per-invocation [`ToolContext`]. The transport registers tools at startup
//! and dispatches structured calls through the registry; the tools talk to
//! the vault through the store and engine types injected at construction.

use async_trait::async_trait;
use lode_core::{LodeToolResult, Tool, ToolCategory};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::errors::ToolError;

/// Execution context passed to every tool invocation.
#[derive(Clone, Debug)]
pub struct ToolContext {
    /// Unique ID of this tool call.
    pub tool_call_id: String,
    /// Session ID of the agent invoking this tool.
    pub session_id: String,
    /// Caller-level cancellation boundary. Vault operations are short
    /// blocking sequences and do not poll this mid-step; a cancelled caller
    /// simply abandons the call without rolling back committed steps.
    pub cancellation: CancellationToken,
}

impl ToolContext {
    /// A context for the given call and session IDs.
    #[must_use]
    pub fn new(tool_call_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            session_id: session_id.into(),
            cancellation: CancellationToken::new(),
        }
    }
}

/// The core trait that every tool must implement.
///
/// Each tool provides:
/// - **Schema** via [`definition()`](LodeTool::definition) — handed to the transport
/// - **Execution** via [`execute()`](LodeTool::execute) — invoked with JSON params
/// - **Metadata** — name and category
#[async_trait]
pub trait LodeTool: Send + Sync {
    /// Tool name — the exact string the transport dispatches on.
    fn name(&self) -> &str;

    /// Tool category for grouping.
    fn category(&self) -> ToolCategory;

    /// Generate the [`Tool`] schema for registration.
    fn definition(&self) -> Tool;

    /// Execute the tool with JSON arguments.
    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<LodeToolResult, ToolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_context_construction() {
        let ctx = ToolContext::new("call-1", "sess-1");
        assert_eq!(ctx.tool_call_id, "call-1");
        assert_eq!(ctx.session_id, "sess-1");
        assert!(!ctx.cancellation.is_cancelled());
    }
}
