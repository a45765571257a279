//! hashstash MCP server entry point.
//!
//! Boots the MCP server on stdio transport with the configured storage backend.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use hashstash_core::{AppConfig, ContentService, SaltedHasher, Storage};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let storage = Storage::from_config(&config);

    tracing::info!(
        storage = ?storage.kind(),
        storage_file = %config.storage_file.display(),
        "Starting hashstash server on stdio transport"
    );

    let service = ContentService::new(Arc::new(storage), SaltedHasher::new(config.secret_salt));
    let handler = handler::HashStashServer::new(service);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
