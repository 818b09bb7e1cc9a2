//! Slack direct-message tool.
//!
//! Sends one message to one workspace user via `chat.postMessage`. Slack
//! opens the direct-message channel itself when given a user ID.

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

/// Parameters for sending a direct message.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SendDmParams {
    /// Recipient's Slack user ID.
    #[schemars(description = "DM을 받을 사용자의 User ID (U로 시작, 예: U0A1F0HCEHY)")]
    pub user_id: String,

    /// Message text to deliver.
    #[schemars(description = "전송할 메시지 내용")]
    pub message: String,
}

/// Slack DM tool implementation.
#[derive(Debug, Clone)]
pub struct SendDmTool;

impl SendDmTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "send_dm";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "특정 사용자에게 Slack DM을 직접 전송합니다. user_id에 U로 시작하는 사용자 ID를 입력하세요.";

    /// Execute the tool logic.
    ///
    /// Slack's application-level failure (`ok: false`) renders as text; a
    /// transport failure propagates to the caller as a rejected tool call.
    pub fn execute(params: &SendDmParams, config: &Config) -> Result<CallToolResult, SlackError> {
        info!("Send DM tool called for user: {}", params.user_id);

        let client = SlackClient::new(&config.credentials);
        let response = client.post_message(&params.user_id, &params.message)?;

        if response.ok {
            Ok(success_result(format!(
                "✅ DM 전송 성공! (user: {})",
                params.user_id
            )))
        } else {
            let code = response.error.unwrap_or_else(|| "unknown_error".to_string());
            Ok(error_result(&format!("❌ 전송 실패: {}", code)))
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SendDmParams>(),
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
                let params: SendDmParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // Use std::thread::spawn to avoid nested runtime panic.
                // reqwest::blocking creates its own runtime.
                let handle = std::thread::spawn(move || Self::execute(&params, &config));

                let result = handle
                    .join()
                    .map_err(|_| McpError::internal_error("Thread panicked".to_string(), None))?;

                result.map_err(|e| McpError::internal_error(e.to_string(), None))
            }
            .boxed()
        })
    }
}
