//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

mod common;
pub mod list_users;
pub mod send_dm;

pub use list_users::{ListUsersParams, ListUsersTool};
pub use send_dm::{SendDmParams, SendDmTool};
