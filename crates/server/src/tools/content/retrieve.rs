//! retrieve_content tool implementation.
//!
//! Returns stored text by digest. Digests that are malformed or were never
//! stored both report NOT_FOUND.

use hashstash_core::{ContentService, Error, StorageBackend, is_valid_digest};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the retrieve_content tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RetrieveContentParams {
    /// The 64-character lowercase hex digest returned by store_content.
    pub hash: String,
}

/// Implementation of the retrieve_content tool.
pub async fn retrieve_impl<S: StorageBackend>(
    service: &ContentService<S>, params: RetrieveContentParams,
) -> Result<CallToolResult, McpError> {
    if !is_valid_digest(&params.hash) {
        return Err(Error::NotFound(params.hash).into());
    }

    let text = service
        .retrieve_content(&params.hash)
        .await?
        .ok_or_else(|| Error::NotFound(params.hash.clone()))?;

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
