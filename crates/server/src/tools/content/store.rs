//! store_content tool implementation.
//!
//! Stores text and returns the digest that addresses it.

use hashstash_core::{ContentService, Error, StorageBackend};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the store_content tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StoreContentParams {
    /// The text to store. May be empty.
    pub text: String,
}

/// Output from the store_content tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StoreContentOutput {
    /// Salted SHA-256 digest addressing the stored text.
    pub hash: String,
    /// Retrieval path for the stored text.
    pub url: String,
}

/// Implementation of the store_content tool.
pub async fn store_impl<S: StorageBackend>(
    service: &ContentService<S>, params: StoreContentParams,
) -> Result<CallToolResult, McpError> {
    let hash = service.store_content(&params.text).await?;
    tracing::debug!(%hash, size = params.text.len(), "stored content");

    let url = format!("/content/{hash}");
    let output = StoreContentOutput { hash, url };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
