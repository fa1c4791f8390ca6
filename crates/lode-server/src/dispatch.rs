//! Registry wiring and the stdio dispatch loop.

use std::sync::Arc;

use lode_core::{Clock, SystemClock};
use lode_memory::{Consolidator, InstructionsEditor, Journal, Ledger, SessionLog};
use lode_settings::LodeSettings;
use lode_store::{DocumentStore, LocalStorage};
use lode_tools::{
    AddNoteTool, ConsolidateTool, ListEntitiesTool, ReadEntityTool, ReflectTool, ToolContext,
    ToolError, ToolRegistry, UpdateInstructionsTool, WriteEntityTool,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::wire::{Request, Response};

/// Build the full tool registry over one document store.
pub fn build_registry(settings: &LodeSettings) -> ToolRegistry {
    let store = Arc::new(DocumentStore::new(
        settings.vault.root_dir.as_str(),
        Arc::new(LocalStorage),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let session = Arc::new(SessionLog::new(
        Arc::clone(&store),
        Arc::clone(&clock),
        settings.vault.session_min_bytes,
    ));
    let journal = Arc::new(Journal::new(
        Arc::clone(&store),
        Arc::clone(&clock),
        settings.vault.journal_max_bytes,
    ));
    let ledger = Arc::new(Ledger::new(Arc::clone(&store), Arc::clone(&clock)));
    let editor = Arc::new(InstructionsEditor::new(Arc::clone(&store), Arc::clone(&clock)));
    let consolidator = Arc::new(Consolidator::new(
        Arc::clone(&store),
        Ledger::new(Arc::clone(&store), Arc::clone(&clock)),
        SessionLog::new(Arc::clone(&store), Arc::clone(&clock), settings.vault.session_min_bytes),
    ));

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(AddNoteTool::new(session)));
    registry.register(Arc::new(ReadEntityTool::new(Arc::clone(&store))));
    registry.register(Arc::new(WriteEntityTool::new(Arc::clone(&store))));
    registry.register(Arc::new(ListEntitiesTool::new(Arc::clone(&store))));
    registry.register(Arc::new(ReflectTool::new(journal, ledger, clock)));
    registry.register(Arc::new(ConsolidateTool::new(consolidator)));
    registry.register(Arc::new(UpdateInstructionsTool::new(editor)));
    registry
}

/// Dispatch a single request line to the registry.
pub async fn handle_line(registry: &ToolRegistry, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => return Response::error("", "INVALID_REQUEST", e.to_string()),
    };

    let Some(tool) = registry.get(&request.tool) else {
        return Response::error(
            request.id,
            "TOOL_NOT_FOUND",
            format!("tool not found: {}", request.tool),
        );
    };

    let ctx = ToolContext::new(request.id.clone(), "stdio");
    let params = request.params.unwrap_or_else(|| serde_json::json!({}));

    match tool.execute(params, &ctx).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => Response::success(request.id, value),
            Err(e) => Response::error(request.id, "INTERNAL_ERROR", e.to_string()),
        },
        Err(error) => {
            warn!(tool = request.tool, %error, "tool execution failed");
            Response::error(request.id, error_code(&error), error.to_string())
        }
    }
}

fn error_code(error: &ToolError) -> &'static str {
    match error {
        ToolError::Validation { .. } => "VALIDATION_ERROR",
        ToolError::ToolNotFound { .. } => "TOOL_NOT_FOUND",
        ToolError::Json(_) => "INVALID_REQUEST",
        ToolError::Internal { .. } => "INTERNAL_ERROR",
    }
}

/// Serve line-delimited JSON over stdin/stdout until EOF.
pub async fn serve_stdio(registry: &ToolRegistry) -> std::io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(registry, &line).await;
        let mut payload = serde_json::to_string(&response)?;
        payload.push('\n');
        stdout.write_all(payload.as_bytes()).await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
