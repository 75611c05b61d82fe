//! MCP server for the contact desk.
//!
//! Exposes submission intake and the submission inbox as MCP tools over stdio.

pub mod handlers;

pub use handlers::ContactDeskServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server with stdio transport until the client disconnects.
pub async fn run_server(server: ContactDeskServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
