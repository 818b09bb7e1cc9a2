//! Slack domain module.
//!
//! This module wraps the two Slack Web API endpoints the server uses:
//! `chat.postMessage` and `users.list`. Responses are decoded into typed
//! shapes immediately after each HTTP call so no untyped payloads leak
//! into the tool layer.

mod client;
mod error;
mod types;

pub use client::SlackClient;
pub use error::SlackError;
pub use types::{PostMessageResponse, User};
