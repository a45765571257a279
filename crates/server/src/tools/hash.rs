//! hash_json tool implementation.
//!
//! Computes the salted digest of a JSON object without storing it. Object keys
//! are hashed in the order they were sent, so reordered objects get different
//! digests.

use hashstash_core::{Error, SaltedHasher, is_valid_payload};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for the hash_json tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HashJsonParams {
    /// The JSON object to fingerprint. Arrays and scalars are rejected.
    pub payload: Value,
}

/// Output from the hash_json tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HashJsonOutput {
    /// Salted SHA-256 digest of the compact JSON serialization.
    pub hash: String,
}

/// Implementation of the hash_json tool.
pub fn hash_impl(hasher: &SaltedHasher, params: &HashJsonParams) -> Result<CallToolResult, McpError> {
    if !is_valid_payload(&params.payload) {
        return Err(Error::InvalidPayload.into());
    }

    let output = HashJsonOutput { hash: hasher.digest(&params.payload) };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
