//! AUTO.RIA MCP Server
//!
//! Model Context Protocol server exposing AUTO.RIA vehicle search to
//! LLM agents over stdio. Logs go to stderr; stdout is the transport.

use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use ria_client::{CredentialStore, RiaClient};
use ria_mcp::server::RiaMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ria_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("ria-mcp starting (stdio transport)");

    let client = RiaClient::new()?;

    let mut credentials = CredentialStore::new();
    match std::env::var("RIA_API_KEY") {
        Ok(key) if !key.is_empty() => {
            credentials.set(key);
            tracing::info!("API key seeded from RIA_API_KEY");
        }
        _ => tracing::info!("no RIA_API_KEY in environment; waiting for set_api_key"),
    }

    let server = RiaMcpServer::new(client, credentials);
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
