//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. The server advertises the tools capability only: the two Slack
//! tools are defined in `domains/tools/definitions/` (one file per tool) and
//! assembled into a `ToolRouter` in `domains/tools/router.rs`. Tool calls for
//! unknown names are rejected by the router before any tool code runs.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// inbound tool calls to the Slack tool implementations.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            tool_router: build_tool_router::<Self>(config.clone()),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Slack DM server. Use send_dm to message a workspace user directly \
                 and list_users to look up user IDs."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
