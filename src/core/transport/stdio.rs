//! STDIO transport.
//!
//! The server is spawned by an MCP client that owns both ends of the pipe:
//! stdout carries protocol frames, logging stays on stderr. One long-lived
//! connection for the process lifetime.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve the MCP protocol over stdin/stdout until the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Serving MCP over stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("stdio connection closed");
        Ok(())
    }
}
