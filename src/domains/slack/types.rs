//! Wire types for the Slack Web API.
//!
//! Only the fields this server reads are modeled; Slack sends many more and
//! serde ignores them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reserved system account present in every workspace, never listed.
pub const SLACKBOT_USER_ID: &str = "USLACKBOT";

/// Request body for `chat.postMessage`.
#[derive(Debug, Serialize)]
pub struct PostMessageRequest<'a> {
    /// Destination - a user ID opens a direct message channel.
    pub channel: &'a str,
    pub text: &'a str,
}

/// Acknowledgment from `chat.postMessage`.
#[derive(Debug, Deserialize)]
pub struct PostMessageResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response envelope from `users.list`.
#[derive(Debug, Deserialize)]
pub struct UsersListResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A raw workspace member as returned by `users.list`.
#[derive(Debug, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub deleted: bool,
}

/// A workspace user as presented to MCP clients.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct User {
    /// Stable user ID assigned by Slack (starts with `U`).
    pub id: String,

    /// Account name.
    pub name: String,

    /// Display name; falls back to `name` when Slack omits it.
    pub real_name: String,
}

/// Filter raw members down to the human, active users.
///
/// Excludes bot accounts, deleted accounts, and the reserved Slackbot
/// account.
pub fn filter_members(members: Vec<Member>) -> Vec<User> {
    members
        .into_iter()
        .filter(|m| !m.is_bot && !m.deleted && m.id != SLACKBOT_USER_ID)
        .map(|m| User {
            real_name: m.real_name.unwrap_or_else(|| m.name.clone()),
            id: m.id,
            name: m.name,
        })
        .collect()
}
