//! Helpers shared by the GeoNames tools.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domains::tools::ToolError;

/// Decode tool arguments into the tool's parameter struct.
pub fn parse_params<T: DeserializeOwned>(args: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Wrap an envelope as a single pretty-printed JSON text item.
pub fn json_result<T: Serialize>(envelope: &T) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(envelope)
        .map_err(|e| ToolError::internal(format!("Failed to serialize result: {e}")))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
