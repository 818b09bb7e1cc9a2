//! Slack workspace user listing tool.
//!
//! Lists the workspace's human, active members via `users.list` and renders
//! them as pretty-printed JSON so a client can pick a user ID for `send_dm`.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::slack::{SlackClient, SlackError};

use super::common::{error_result, success_result};

/// Parameters for listing users. The tool takes no input.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListUsersParams {}

/// Slack user listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListUsersTool;

impl ListUsersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_users";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Slack 워크스페이스의 사용자 목록을 조회합니다.";

    /// Execute the tool logic.
    ///
    /// Slack's `ok: false` renders as text with the error code; a transport
    /// failure propagates to the caller as a rejected tool call.
    pub fn execute(config: &Config) -> Result<CallToolResult, SlackError> {
        info!("List users tool called");

        let client = SlackClient::new(&config.credentials);
        match client.list_users() {
            Ok(users) => {
                let text = serde_json::to_string_pretty(&users)?;
                Ok(success_result(text))
            }
            Err(SlackError::Api { code }) => {
                Ok(error_result(&format!("사용자 목록 조회 실패: {}", code)))
            }
            Err(e) => Err(e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListUsersParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let _params: ListUsersParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // Use std::thread::spawn to avoid nested runtime panic.
                // reqwest::blocking creates its own runtime.
                let handle = std::thread::spawn(move || Self::execute(&config));

                let result = handle
                    .join()
                    .map_err(|_| McpError::internal_error("Thread panicked".to_string(), None))?;

                result.map_err(|e| McpError::internal_error(e.to_string(), None))
            }
            .boxed()
        })
    }
}
