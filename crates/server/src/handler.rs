//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::{
    HashJsonParams, RetrieveContentParams, StoreContentParams,
    content::{retrieve_impl, store_impl},
    hash::hash_impl,
    health::health_impl,
};

use hashstash_core::ContentService;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for hashstash.
#[derive(Clone)]
pub struct HashStashServer {
    service: ContentService,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl HashStashServer {
    /// Create a new server handler around a configured content service.
    pub fn new(service: ContentService) -> Self {
        Self { service, tool_router: Self::tool_router() }
    }

    /// Liveness check.
    #[tool(description = "Report server liveness. Returns {\"status\":\"ok\"}.")]
    async fn health(&self) -> Result<CallToolResult, McpError> {
        health_impl()
    }

    /// Fingerprint a JSON object without storing it.
    #[tool(
        description = "Compute the salted SHA-256 digest of a JSON object without storing it. Key order is significant."
    )]
    async fn hash_json(&self, params: Parameters<HashJsonParams>) -> Result<CallToolResult, McpError> {
        hash_impl(self.service.hasher(), &params.0)
    }

    /// Store text under its salted digest.
    #[tool(description = "Store text and return the 64-character hex digest that addresses it.")]
    async fn store_content(&self, params: Parameters<StoreContentParams>) -> Result<CallToolResult, McpError> {
        store_impl(&self.service, params.0).await
    }

    /// Look up stored text by digest.
    #[tool(description = "Retrieve previously stored text by its 64-character hex digest.")]
    async fn retrieve_content(&self, params: Parameters<RetrieveContentParams>) -> Result<CallToolResult, McpError> {
        retrieve_impl(&self.service, params.0).await
    }
}

impl ServerHandler for HashStashServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "hashstash".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
