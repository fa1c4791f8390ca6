//! Tool error types.

use thiserror::Error;

/// Errors that can occur during tool execution.
///
/// Most failure modes are rendered as error results instead — this enum
/// covers the cases the transport itself must distinguish.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Parameter validation failed before the tool could run.
    #[error("validation error: {message}")]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Tool not found in the registry.
    #[error("tool not found: {name}")]
    ToolNotFound {
        /// The tool name that was not found.
        name: String,
    },

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error (catch-all).
    #[error("{message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display() {
        let err = ToolError::Validation { message: "missing required parameter".into() };
        assert_eq!(err.to_string(), "validation error: missing required parameter");
    }

    #[test]
    fn tool_not_found_display_includes_name() {
        let err = ToolError::ToolNotFound { name: "Reflect".into() };
        assert_eq!(err.to_string(), "tool not found: Reflect");
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let tool_err = ToolError::from(json_err);
        assert!(matches!(tool_err, ToolError::Json(_)));
    }
}
