//! Shared parameter-validation helpers.
//!
//! Validation failures are rendered as error RESULTS, not `Err` values, so
//! the transport always gets a well-formed response to relay. The `Err`
//! side of these helpers carries the ready-made result for early return.

use lode_core::{LodeToolResult, error_result};
use lode_store::VaultError;
use serde_json::Value;

/// Require a non-null string parameter.
pub fn validate_required_string(
    params: &Value,
    field: &str,
    hint: &str,
) -> Result<String, LodeToolResult> {
    match params.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => {
            Err(error_result(format!("Missing required parameter: {field} ({hint})")))
        }
        _ => Err(error_result(format!("Invalid type for parameter: {field} (expected string)"))),
    }
}

/// An optional string parameter, `None` when absent or null.
#[must_use]
pub fn get_optional_string(params: &Value, field: &str) -> Option<String> {
    params.get(field).and_then(Value::as_str).map(ToOwned::to_owned)
}

/// An optional unsigned integer parameter, `None` when absent or null.
#[must_use]
pub fn get_optional_u64(params: &Value, field: &str) -> Option<u64> {
    params.get(field).and_then(Value::as_u64)
}

/// Render a vault failure as a descriptive error result naming the
/// operation and the logical path — never a physical one.
#[must_use]
pub fn vault_error_result(error: &VaultError, operation: &str) -> LodeToolResult {
    match error {
        VaultError::PathEscape { path } => {
            error_result(format!("Path escapes the vault root: {path}"))
        }
        VaultError::NotFound { path } => error_result(format!("Entity not found: {path}")),
        VaultError::Storage(_) => error_result(format!("Storage failure while {operation}")),
    }
}
