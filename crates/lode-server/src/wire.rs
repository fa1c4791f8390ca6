//! Wire-format types for the stdio transport.
//!
//! One JSON request per line in, one JSON response per line out. The
//! transport validates shape and relays results; it holds no vault logic.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incoming request from the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Request {
    /// Unique request identifier, echoed back.
    pub id: String,
    /// Tool name to dispatch to.
    pub tool: String,
    /// Tool parameters object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// Outgoing response to the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Response {
    /// Echoed request identifier.
    pub id: String,
    /// Whether the call was dispatched and executed.
    pub success: bool,
    /// Tool result payload (present when `success == true`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload (present when `success == false`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Structured error body inside a [`Response`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g. `TOOL_NOT_FOUND`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl Response {
    /// Build a success response.
    pub fn success(id: impl Into<String>, result: Value) -> Self {
        Self { id: id.into(), success: true, result: Some(result), error: None }
    }

    /// Build an error response.
    pub fn error(id: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            success: false,
            result: None,
            error: Some(ErrorBody { code: code.into(), message: message.into() }),
        }
    }
}
