//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only assembles
//! them. Calls for names outside the router are rejected by rmcp before any
//! tool code runs, so an unknown tool never causes a network request.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{ListUsersTool, SendDmTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListUsersTool::create_route(config.clone()))
        .with_route(SendDmTool::create_route(config))
}
