//! Unified error types for hashstash.
//!
//! Every variant carries a stable code prefix so adapters can surface it
//! verbatim to clients.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the hashstash core and its adapters.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., a missing text field).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Generic-hash payload is not a JSON object.
    #[error("INVALID_PAYLOAD: request body must be a JSON object")]
    InvalidPayload,

    /// No stored content for the given digest.
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    /// Snapshot file or directory operation failed.
    #[error("STORAGE_ERROR: {0}")]
    Storage(#[from] std::io::Error),

    /// Snapshot could not be encoded.
    #[error("STORAGE_ERROR: serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::InvalidPayload => (-32602, "Invalid request body. Must be a JSON object.".to_string()),
            Error::NotFound(msg) => (-32001, format!("Not found: {msg}")),
            Error::Storage(e) => (-32002, e.to_string()),
            Error::Serialization(e) => (-32002, e.to_string()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
