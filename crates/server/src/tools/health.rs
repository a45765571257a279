//! health tool implementation.

use hashstash_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output from the health tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthOutput {
    pub status: String,
}

/// Implementation of the health tool.
pub fn health_impl() -> Result<CallToolResult, McpError> {
    let output = HealthOutput { status: "ok".into() };
    let json = serde_json::to_string(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
